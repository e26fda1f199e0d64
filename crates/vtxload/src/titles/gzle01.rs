// Generated by vtxgen from a descriptor profile of GZLE01.

crate::specialize::specialize! {
    "GZLE01";

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022200, 0x01216009, 0x00000000, 0x00000000] 371602133 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E01009, 0x80000000, 0x00000000] 254628094 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E01009, 0x00000000, 0x00000000] 96809091 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E00C09, 0x80000000, 0x00000000] 78298861 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_dir_s16
    [0x00010100, 0x00E00009, 0x00000000, 0x00000000] 19209264 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_i8_flt
    [0x00000200, 0x00000009, 0x00000000, 0x00000000] 15125136 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
    }

    p_mtx1_3_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_s16
    [0x00033300, 0x00E16009, 0x80000000, 0x00000000] 13419332 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt
    [0x00000300, 0x00000009, 0x00000000, 0x00000000] 9402870 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16
    [0x00000F00, 0x00000C09, 0x80000000, 0x00000000] 6855306 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i16_s16
    [0x00030300, 0x00E00009, 0x00000000, 0x00000000] 4085414 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i16_flt
    [0x00030300, 0x01200009, 0x00000000, 0x00000000] 2975520 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i16_8888
    [0x00003300, 0x00016009, 0x00000000, 0x00000000] 1983680 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
    }

    p_mtx0_3_dir_flt_nrm_0_0_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt
    [0x00011500, 0x01217009, 0x00000000, 0x00000000] 1806564 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, f32, 1>;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_dir_flt
    [0x00010F00, 0x01201009, 0x00000000, 0x00000000] 1462560 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_dir_s16_t0_mtx0_1_dir_flt
    [0x00010100, 0x01200007, 0x00000000, 0x00000000] 1118096 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_dir_s16_t0_mtx0_1_dir_s16_t1_mtx0_1_dir_s16
    [0x00050100, 0x00E00007, 0x00000007, 0x00000000] 440028 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        tex_coord<Direct, i16, 2>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_dir_s8
    [0x00010200, 0x00600009, 0x00000000, 0x00000000] 400120 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Direct, i8, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt
    [0x00011F00, 0x01217009, 0x00000000, 0x00000000] 374000 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_dir_s16
    [0x00000100, 0x00000007, 0x00000000, 0x00000000] 212982 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s8_t0_mtx0_1_i16_flt
    [0x00030B00, 0x01200409, 0x00000000, 0x00000000] 146464 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_dir_s8
    [0x00000100, 0x00000003, 0x00000000, 0x00000000] 133340 {
        bounds_prepare;
        position<Direct, i8, 3>;
        bounds_update;
    }

    p_mtx0_3_dir_s16_t0_mtx0_1_dir_s8
    [0x00010100, 0x00600007, 0x00000000, 0x00000000] 124476 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        tex_coord<Direct, i8, 2>;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_i8_flt
    [0x00020200, 0x01200009, 0x00000000, 0x00000000] 11556 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_dir_s8_t0_mtx0_1_dir_s8
    [0x00010100, 0x00600003, 0x00000000, 0x00000000] 9860 {
        bounds_prepare;
        position<Direct, i8, 3>;
        bounds_update;
        tex_coord<Direct, i8, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_dir_flt
    [0x00010300, 0x01200009, 0x00000000, 0x00000000] 8320 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_dir_s8_t0_mtx0_1_dir_u8
    [0x00010100, 0x00200003, 0x00000000, 0x00000000] 304 {
        bounds_prepare;
        position<Direct, i8, 3>;
        bounds_update;
        tex_coord<Direct, u8, 2>;
    }
}
