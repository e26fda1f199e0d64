// Generated by vtxgen from a descriptor profile of GFZE01.

crate::specialize::specialize! {
    "GFZE01";

    p_mtx0_3_dir_flt_nrm_0_0_dir_flt_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt
    [0x00050500, 0x01201009, 0x00000009, 0x00000000] 67537925 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, f32, 1>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_dir_flt_nrm_0_0_dir_flt_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt_t2_mtx0_1_dir_flt
    [0x00150500, 0x01201009, 0x00001209, 0x00000000] 27065691 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, f32, 1>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_dir_s16_nrm_0_0_dir_s16_t0_mtx0_1_dir_s16
    [0x00010500, 0x00E00C07, 0x00000000, 0x00000000] 24996385 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        normal<Direct, i16, 1>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_dir_s16_nrm_0_0_dir_s16_t0_mtx0_1_dir_s16_t1_mtx0_1_dir_s16_t2_mtx0_1_dir_s16
    [0x00150500, 0x00E00C07, 0x00000E07, 0x00000000] 21172985 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        normal<Direct, i16, 1>;
        tex_coord<Direct, i16, 2>;
        tex_coord<Direct, i16, 2>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_dir_flt_nrm_1_0_dir_flt_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt_t2_mtx0_1_dir_flt
    [0x00150500, 0x01201209, 0x00001209, 0x00000000] 9341798 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, f32, 3>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_dir_flt_nrm_0_0_dir_flt_t0_mtx0_1_dir_flt
    [0x00010500, 0x01201009, 0x80000000, 0x00000000] 9269969 {
        pos_matrix;
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, f32, 1>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_dir_flt_nrm_1_0_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt_t2_mtx0_1_dir_flt
    [0x00151500, 0x01217209, 0x00001209, 0x00000000] 7297696 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, f32, 3>;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_dir_s16_nrm_0_0_dir_s16_t0_mtx0_1_dir_s16
    [0x00010500, 0x00E00C07, 0x80000000, 0x00000000] 7134932 {
        pos_matrix;
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        normal<Direct, i16, 1>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_dir_flt_nrm_0_0_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt_t2_mtx0_1_dir_flt
    [0x00151500, 0x01217009, 0x00001209, 0x00000000] 5379890 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, f32, 1>;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_dir_s16_nrm_0_0_dir_s16_t0_mtx0_1_dir_s16_t1_mtx0_1_dir_s16
    [0x00050500, 0x00E00C07, 0x00000007, 0x00000000] 4522416 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        normal<Direct, i16, 1>;
        tex_coord<Direct, i16, 2>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_dir_s16_nrm_0_0_dir_s16_c0_1_dir_8888_t0_mtx0_1_dir_s16
    [0x00011500, 0x00E16C07, 0x00000000, 0x00000000] 2193030 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        normal<Direct, i16, 1>;
        color<Direct, Rgba8888>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_dir_s16_nrm_0_0_dir_s16_c0_1_dir_8888_t0_mtx0_1_dir_s16_t1_mtx0_1_dir_s16
    [0x00051500, 0x00E16C07, 0x00000007, 0x00000000] 2084570 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        normal<Direct, i16, 1>;
        color<Direct, Rgba8888>;
        tex_coord<Direct, i16, 2>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx1_3_dir_s16_nrm_0_0_dir_s16_c0_1_dir_8888_t0_mtx0_1_dir_s16
    [0x00011500, 0x00E16C07, 0x80000000, 0x00000000] 12 {
        pos_matrix;
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        normal<Direct, i16, 1>;
        color<Direct, Rgba8888>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx1_3_dir_s16_nrm_0_0_dir_s16
    [0x00000500, 0x00000C07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        normal<Direct, i16, 1>;
    }
}
