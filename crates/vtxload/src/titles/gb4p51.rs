// Generated by vtxgen from a descriptor profile of GB4P51.

crate::specialize::specialize! {
    "GB4P51";

    p_mtx0_3_i16_s16_nrm_0_0_i16_s8_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E00407, 0x00000000, 0x00000000] 139264034 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index16, i16, 2>;
    }
}
