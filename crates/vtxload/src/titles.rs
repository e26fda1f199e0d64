//! Precompiled title tables.

use crate::specialize::TitleTable;

mod g4bp08;
mod gb4p51;
mod gbve41;
mod gfze01;
mod gkye01;
mod glme01;
mod glmp01;
mod gm8e01;
mod gmse01;
mod gnueda;
mod gsae01;
mod gz2p01;
mod gzle01;
mod r5wea4;
mod rbup08;
mod rmce01;
mod rmcp01;
mod rmgp01;
mod rsbe01;
mod rsbp01;
mod rztp01;
mod sdwp18;
mod sf8e01;
mod smnp01;
mod spde52;
mod spxp41;
mod srmgp01;
mod sx4e01;
mod sx4p01;
mod wiletl;

static TITLES: [&TitleTable; 30] = [
    &g4bp08::TABLE,
    &gb4p51::TABLE,
    &gbve41::TABLE,
    &gfze01::TABLE,
    &gkye01::TABLE,
    &glme01::TABLE,
    &glmp01::TABLE,
    &gm8e01::TABLE,
    &gmse01::TABLE,
    &gnueda::TABLE,
    &gsae01::TABLE,
    &gz2p01::TABLE,
    &gzle01::TABLE,
    &r5wea4::TABLE,
    &rbup08::TABLE,
    &rmce01::TABLE,
    &rmcp01::TABLE,
    &rmgp01::TABLE,
    &rsbe01::TABLE,
    &rsbp01::TABLE,
    &rztp01::TABLE,
    &sdwp18::TABLE,
    &sf8e01::TABLE,
    &smnp01::TABLE,
    &spde52::TABLE,
    &spxp41::TABLE,
    &srmgp01::TABLE,
    &sx4e01::TABLE,
    &sx4p01::TABLE,
    &wiletl::TABLE,
];

/// Every title with specialized decoders.
pub fn all() -> &'static [&'static TitleTable] {
    &TITLES
}

/// Finds the table of a title by its game id.
pub fn find(id: &str) -> Option<&'static TitleTable> {
    TITLES.iter().copied().find(|table| table.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(find("GZLE01").map(TitleTable::id), Some("GZLE01"));
        assert_eq!(find("gmse01").map(TitleTable::id), Some("GMSE01"));
        assert_eq!(find("srmgp01").map(TitleTable::id), Some("sRMGP01"));
        assert_eq!(find("RMGP01").map(TitleTable::id), Some("RMGP01"));
        assert!(find("GALE01").is_none());
    }

    #[test]
    fn ids_are_unique() {
        for (i, table) in all().iter().enumerate() {
            assert!(
                all()[i + 1..]
                    .iter()
                    .all(|other| !other.id.eq_ignore_ascii_case(table.id))
            );
        }
    }

    #[test]
    fn tables_are_not_empty() {
        assert!(all().iter().all(|table| !table.is_empty()));
    }
}
