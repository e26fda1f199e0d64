// Generated by vtxgen from a descriptor profile of RMCP01.

crate::specialize::specialize! {
    "RMCP01";

    p_mtx0_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt
    [0x00032300, 0x01216009, 0x00000000, 0x00000000] 114564372 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022300, 0x00A16009, 0x00000000, 0x00000000] 41184252 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022300, 0x01216009, 0x00000000, 0x00000000] 38191608 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_u16_t2_mtx1_0_inv_u8
    [0x00032F04, 0x00A16C09, 0x80000000, 0x00000000] 27497124 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, u16, 2>;
        skip_tex_coord;
        tex_matrix_only;
    }

    p_mtx0_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F2300, 0x01216009, 0x00000009, 0x00000000] 23903724 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_u16_t1_mtx1_0_inv_u8
    [0x00022B02, 0x00A00C09, 0x80000000, 0x00000000] 15081906 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u16, 2>;
        tex_matrix_only;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_flt
    [0x00032F00, 0x01216C09, 0x80000000, 0x00000000] 14195346 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022F00, 0x01216C09, 0x00000000, 0x00000000] 11340420 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A2200, 0x01216009, 0x00000009, 0x00000000] 10002564 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00022F06, 0x00E16C09, 0x80000000, 0x00000000] 5261100 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_s16
    [0x000A2200, 0x00216009, 0x00000007, 0x00000000] 821376 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A00409, 0x00000000, 0x00000000] 300636 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_s16
    [0x00022B00, 0x00E00C07, 0x00000000, 0x00000000] 110376 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16
    [0x00020B00, 0x00A00C09, 0x00000000, 0x00000000] 109178 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022200, 0x00216009, 0x00000000, 0x00000000] 56308 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }
}
