// Generated by vtxgen from a descriptor profile of SF8E01.

crate::specialize::specialize! {
    "SF8E01";

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F0F00, 0x00E00C09, 0x00000007, 0x00000000] 546370390 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F0F00, 0x01200C09, 0x00000009, 0x00000000] 519680237 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx1_1_i16_s16
    [0x00030F01, 0x00E00C07, 0x80000000, 0x00000000] 244363049 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord_matrix<Index16, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_flt
    [0x00030F00, 0x01200C09, 0x80000000, 0x00000000] 36562350 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_flt
    [0x00030F00, 0x01200C07, 0x80000000, 0x00000000] 30090261 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F0F00, 0x01201009, 0x00000009, 0x00000000] 17588952 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_t0_mtx1_1_i16_s16
    [0x00030F01, 0x00E00C09, 0x80000000, 0x00000000] 11652500 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord_matrix<Index16, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_t0_mtx1_1_i16_flt
    [0x00030F01, 0x01201009, 0x80000000, 0x00000000] 695616 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord_matrix<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt
    [0x00000F00, 0x00001009, 0x00000000, 0x00000000] 59488 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16
    [0x00000F00, 0x00000C09, 0x80000000, 0x00000000] 24848 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt_t2_mtx0_1_dir_flt
    [0x00151100, 0x01216009, 0x00001209, 0x00000000] 4488 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_dir_flt_nrm_0_0_dir_flt_c0_1_dir_8888
    [0x00001500, 0x00017009, 0x00000000, 0x00000000] 3500 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, f32, 1>;
        color<Direct, Rgba8888>;
    }
}
