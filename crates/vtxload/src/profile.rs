//! Descriptor usage profiles.
//!
//! A profile records which descriptors a title decoded vertices with and how many. Profiles are
//! the input of `vtxgen`, which turns them into title tables of specialized decoders.

use crate::descriptor::FormatDescriptor;
use easyerr::{Error, ResultExt};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEntry {
    /// The [`words`](FormatDescriptor::words) of the descriptor.
    pub words: [u32; 4],
    pub name: String,
    pub vertices: u64,
}

impl ProfileEntry {
    pub fn descriptor(&self) -> FormatDescriptor {
        FormatDescriptor::from_words(self.words)
    }
}

/// Vertex counts of the descriptors used by a title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Game id of the title.
    pub title: String,
    pub entries: Vec<ProfileEntry>,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Encode {
        source: ciborium::ser::Error<std::io::Error>,
    },
    #[error(transparent)]
    Decode {
        source: ciborium::de::Error<std::io::Error>,
    },
    #[error("cannot merge a profile of {f1} into a profile of {f0}")]
    TitleMismatch(String, String),
}

impl Profile {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Adds `vertices` to the count of `descriptor`.
    pub fn record(&mut self, descriptor: &FormatDescriptor, vertices: u64) {
        let words = descriptor.words();
        match self.entries.iter_mut().find(|e| e.words == words) {
            Some(entry) => entry.vertices += vertices,
            None => self.entries.push(ProfileEntry {
                words,
                name: descriptor.name(),
                vertices,
            }),
        }
    }

    /// Sums the counts of another profile of the same title into this one.
    pub fn merge(&mut self, other: Profile) -> Result<(), ProfileError> {
        if self.title.is_empty() {
            self.title = other.title.clone();
        }

        if !self.title.eq_ignore_ascii_case(&other.title) {
            return Err(ProfileError::TitleMismatch(self.title.clone(), other.title));
        }

        for entry in other.entries {
            self.record(&entry.descriptor(), entry.vertices);
        }

        Ok(())
    }

    /// Sorts entries by vertex count, most used first.
    pub fn sort(&mut self) {
        self.entries
            .sort_by(|a, b| b.vertices.cmp(&a.vertices).then(a.words.cmp(&b.words)));
    }

    pub fn to_writer(&self, writer: impl Write) -> Result<(), ProfileError> {
        ciborium::into_writer(self, writer).context(ProfileCtx::Encode)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ProfileError> {
        ciborium::from_reader(reader).context(ProfileCtx::Decode)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        descriptor::test::Registers,
        format::{AttributeMode, ColorFormat, ColorKind, CoordsFormat, PositionKind},
    };

    fn descriptors() -> [FormatDescriptor; 2] {
        let a = Registers::default()
            .position(AttributeMode::Index16, PositionKind::Vec3, CoordsFormat::F32, 0)
            .descriptor();

        let b = Registers::default()
            .position(AttributeMode::Direct, PositionKind::Vec3, CoordsFormat::I16, 0)
            .color(0, AttributeMode::Direct, ColorKind::Rgba, ColorFormat::Rgba8888)
            .descriptor();

        [a, b]
    }

    #[test]
    fn record_and_merge() {
        let [a, b] = descriptors();

        let mut profile = Profile::new("GZLE01");
        profile.record(&a, 10);
        profile.record(&b, 30);
        profile.record(&a, 5);
        assert_eq!(profile.entries.len(), 2);

        let mut other = Profile::new("GZLE01");
        other.record(&a, 100);
        profile.merge(other).unwrap();
        profile.sort();

        assert_eq!(profile.entries[0].words, a.words());
        assert_eq!(profile.entries[0].vertices, 115);
        assert_eq!(profile.entries[0].name, a.name());
        assert_eq!(profile.entries[1].vertices, 30);

        assert!(matches!(
            profile.merge(Profile::new("GMSE01")),
            Err(ProfileError::TitleMismatch(..))
        ));
    }

    #[test]
    fn cbor_dump() {
        let [a, b] = descriptors();
        let mut profile = Profile::new("GMSE01");
        profile.record(&a, 1);
        profile.record(&b, 2);

        let mut bytes = Vec::new();
        profile.to_writer(&mut bytes).unwrap();
        assert_eq!(Profile::from_reader(bytes.as_slice()).unwrap(), profile);

        assert!(Profile::from_reader(&bytes[..bytes.len() / 2]).is_err());
    }
}
