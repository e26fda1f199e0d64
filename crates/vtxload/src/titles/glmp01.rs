// Generated by vtxgen from a descriptor profile of GLMP01.

crate::specialize::specialize! {
    "GLMP01";

    p_mtx0_3_i16_s16_nrm_0_0_i16_flt_t0_mtx0_1_i16_flt
    [0x00030F00, 0x01201007, 0x00000000, 0x00000000] 157539339 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_flt_c0_1_i8_8888
    [0x00002300, 0x00016009, 0x80000000, 0x00000000] 44155017 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_t0_mtx1_1_i16_flt_t1_mtx1_0_inv_u8
    [0x00030F03, 0x01201009, 0x80000000, 0x00000000] 30834354 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord_matrix<Index16, f32, 2>;
        tex_matrix_only;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_flt_t6_mtx1_0_inv_u8_t7_mtx1_0_inv_u8
    [0x00030FC0, 0x01201009, 0x80000000, 0x00000000] 22603544 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, f32, 2>;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_i8_flt
    [0x00020200, 0x01200009, 0x00000000, 0x00000000] 9856328 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_1_0_i16_s16_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F0F00, 0x00E00E09, 0x00000007, 0x00000000] 7224640 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 3>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_s16_t0_mtx0_1_i16_flt
    [0x00030300, 0x01200007, 0x00000000, 0x00000000] 3961087 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_dir_flt_t0_mtx0_1_i8_u8
    [0x00020100, 0x00200009, 0x80000000, 0x00000000] 1011732 {
        pos_matrix;
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_dir_s16_c0_1_dir_8888_t0_mtx0_1_dir_u16
    [0x00011100, 0x00A16007, 0x00000000, 0x00000000] 617108 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, u16, 2>;
    }

    p_mtx1_3_i8_s16_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200007, 0x80000000, 0x00000000] 93160 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_u16
    [0x00011100, 0x00A16008, 0x00000000, 0x00000000] 75408 {
        bounds_prepare;
        position<Direct, f32, 2>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, u16, 2>;
    }

    p_mtx0_3_dir_s16_c0_1_dir_8888
    [0x00001100, 0x00016007, 0x00000000, 0x00000000] 62736 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F0F00, 0x00E00C09, 0x00000007, 0x00000000] 47280 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_1_1_i16_flt_t0_mtx0_1_i16_flt_t6_mtx1_0_inv_u8_t7_mtx1_0_inv_u8
    [0x00030FC0, 0x81201209, 0x80000000, 0x00000000] 45666 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal_index3<Index16, f32>;
        tex_coord<Index16, f32, 2>;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_flt
    [0x00000F00, 0x00001007, 0x00000000, 0x00000000] 15072 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
    }

    p_mtx1_3_i16_flt_t0_mtx0_1_i16_flt_t6_mtx1_0_inv_u8_t7_mtx1_0_inv_u8
    [0x000303C0, 0x01200009, 0x80000000, 0x00000000] 6864 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index16, f32, 2>;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i16_s16
    [0x00000300, 0x00000007, 0x00000000, 0x00000000] 4140 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
    }

    p_mtx0_3_dir_s16_c0_1_i16_8888_t0_mtx0_1_i16_flt
    [0x00033100, 0x01216007, 0x00000000, 0x00000000] 3912 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_flt_t6_mtx1_0_inv_u8_t7_mtx1_0_inv_u8
    [0x000003C0, 0x00000009, 0x80000000, 0x00000000] 1986 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx1_3_i16_flt_t0_mtx1_0_inv_u8_t1_mtx1_0_inv_u8
    [0x00000303, 0x00000009, 0x80000000, 0x00000000] 330 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_matrix_only;
        tex_matrix_only;
    }
}
