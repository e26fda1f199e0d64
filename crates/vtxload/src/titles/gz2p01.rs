// Generated by vtxgen from a descriptor profile of GZ2P01.

crate::specialize::specialize! {
    "GZ2P01";

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8
    [0x00030F02, 0x00E00C09, 0x80000000, 0x00000000] 35048130 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, i16, 2>;
        tex_matrix_only;
    }

    p_mtx0_2_i16_flt_t0_mtx0_1_dir_flt
    [0x00010300, 0x01200008, 0x00000000, 0x00000000] 34333480 {
        bounds_prepare;
        position<Index16, f32, 2>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E00C09, 0x80000000, 0x00000000] 32366998 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_dir_s16
    [0x00010100, 0x00E00009, 0x00000000, 0x00000000] 15559468 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_2_i16_flt
    [0x00000300, 0x00000008, 0x00000000, 0x00000000] 2425534 {
        bounds_prepare;
        position<Index16, f32, 2>;
        bounds_update;
    }

    p_mtx0_3_i8_flt
    [0x00000200, 0x00000009, 0x00000000, 0x00000000] 1008500 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
    }

    p_mtx0_3_i16_flt_c0_1_i16_8888
    [0x00003300, 0x00016009, 0x00000000, 0x00000000] 286594 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s8_t0_mtx0_1_i16_flt
    [0x00030F00, 0x01200409, 0x00000000, 0x00000000] 155572 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i16_s16
    [0x00030300, 0x00E00009, 0x00000000, 0x00000000] 108604 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_2_dir_s8_t0_mtx0_1_dir_s8
    [0x00010100, 0x00600002, 0x00000000, 0x00000000] 108060 {
        bounds_prepare;
        position<Direct, i8, 2>;
        bounds_update;
        tex_coord<Direct, i8, 2>;
    }

    p_mtx0_3_i16_s16_t0_mtx0_1_i16_s16
    [0x00030300, 0x00E00007, 0x00000000, 0x00000000] 96084 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_dir_s8
    [0x00010200, 0x00600009, 0x00000000, 0x00000000] 19036 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Direct, i8, 2>;
    }

    p_mtx0_3_dir_s16
    [0x00000100, 0x00000007, 0x00000000, 0x00000000] 6216 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
    }

    p_mtx0_3_dir_s16_t0_mtx0_1_dir_s8
    [0x00010100, 0x00600007, 0x00000000, 0x00000000] 824 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        tex_coord<Direct, i8, 2>;
    }
}
