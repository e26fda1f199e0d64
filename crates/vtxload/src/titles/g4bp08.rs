// Generated by vtxgen from a descriptor profile of G4BP08.

crate::specialize::specialize! {
    "G4BP08";

    p_mtx1_3_dir_flt_nrm_0_0_dir_s8_t0_mtx0_1_dir_flt
    [0x00010500, 0x01200409, 0x80000000, 0x00000000] 210524 {
        pos_matrix;
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, i8, 1>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_dir_s8_nrm_0_0_dir_s8_t0_mtx0_1_dir_s8
    [0x00010500, 0x00600403, 0x00000000, 0x00000000] 191420 {
        bounds_prepare;
        position<Direct, i8, 3>;
        bounds_update;
        normal<Direct, i8, 1>;
        tex_coord<Direct, i8, 2>;
    }

    p_mtx0_3_dir_flt_nrm_0_0_dir_s8_t0_mtx0_1_dir_flt
    [0x00010500, 0x01200409, 0x00000000, 0x00000000] 143592 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, i8, 1>;
        tex_coord<Direct, f32, 2>;
    }
}
