// Generated by vtxgen from a descriptor profile of SPXP41.

crate::specialize::specialize! {
    "SPXP41";

    p_mtx0_3_i16_s16_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u8
    [0x000F0300, 0x00E00007, 0x00000001, 0x00000000] 1386987325 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u8, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_flt_t7_mtx1_0_inv_u8
    [0x00030F80, 0x01201009, 0x80000000, 0x00000000] 907716596 {
        pos_matrix;
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
        skip_tex_coord;
        tex_matrix_only;
    }

    p_mtx0_3_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u8
    [0x000F3300, 0x00E16007, 0x00000001, 0x00000000] 574119742 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u8, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F0300, 0x01200009, 0x00000009, 0x00000000] 522350893 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_t0_mtx1_1_i16_flt
    [0x00030F01, 0x01201009, 0x80000000, 0x00000000] 121562691 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord_matrix<Index16, f32, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s8_c0_1_i16_8888_t0_mtx0_1_i16_s16
    [0x00033F00, 0x00E16407, 0x00000000, 0x00000000] 99148371 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u8
    [0x000A0200, 0x00E00007, 0x00000001, 0x00000000] 66794075 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s8_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u8
    [0x000F0F00, 0x00E00407, 0x00000001, 0x00000000] 60433657 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u8, 2>;
    }

    p_mtx1_3_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_flt_t7_mtx1_0_inv_u8
    [0x00033380, 0x01216009, 0x80000000, 0x00000000] 37901628 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
    }

    p_mtx0_3_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u8
    [0x000A2200, 0x00E16007, 0x00000001, 0x00000000] 36753429 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t7_mtx1_0_inv_u8
    [0x00022280, 0x01216009, 0x80000000, 0x00000000] 8658216 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A0200, 0x01200009, 0x00000009, 0x00000000] 5573615 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx0_1_i16_s16_t7_mtx1_0_inv_u8
    [0x00030F80, 0x00E00407, 0x80000000, 0x00000000] 4344828 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index16, i16, 2>;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888
    [0x00002200, 0x00016009, 0x00000000, 0x00000000] 1418964 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_s16_t7_mtx1_0_inv_u8
    [0x00020A80, 0x00E00407, 0x80000000, 0x00000000] 650695 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i16, 2>;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
    }

    p_mtx1_3_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t7_mtx1_0_inv_u8
    [0x00022280, 0x00E16007, 0x80000000, 0x00000000] 611814 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
    }

    p_mtx0_2_dir_s16_t0_mtx0_1_dir_s16_t1_mtx0_1_dir_s16
    [0x00050100, 0x00E00006, 0x00000007, 0x00000000] 19800 {
        bounds_prepare;
        position<Direct, i16, 2>;
        bounds_update;
        tex_coord<Direct, i16, 2>;
        tex_coord<Direct, i16, 2>;
    }
}
