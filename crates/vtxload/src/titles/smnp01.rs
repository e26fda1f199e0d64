// Generated by vtxgen from a descriptor profile of SMNP01.

crate::specialize::specialize! {
    "SMNP01";

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16C07, 0x00000000, 0x00000000] 105404 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00032F06, 0x00E16C07, 0x80000000, 0x00000000] 65130 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16
    [0x00032B00, 0x00E16C07, 0x00000000, 0x00000000] 43992 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8_t3_mtx1_0_inv_u8
    [0x00032F0E, 0x00E16C07, 0x80000000, 0x00000000] 42588 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_matrix_only;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_2_i16_flt_t0_mtx0_1_i8_s16
    [0x00020300, 0x00E00008, 0x00000000, 0x00000000] 35776 {
        bounds_prepare;
        position<Index16, f32, 2>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A16C07, 0x00000000, 0x00000000] 29926 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i16_flt_t0_mtx0_1_i8_u16
    [0x00020300, 0x00A00008, 0x00000000, 0x00000000] 29120 {
        bounds_prepare;
        position<Index16, f32, 2>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16
    [0x00032F00, 0x00E16C07, 0x00000000, 0x00000000] 28704 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00C07, 0x00000000, 0x00000000] 26000 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00022F06, 0x00E16C07, 0x80000000, 0x00000000] 24336 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i8_s16_t0_mtx0_1_i8_u16
    [0x00020200, 0x00A00007, 0x00000000, 0x00000000] 16224 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00407, 0x00000000, 0x00000000] 16224 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_flt_t0_mtx0_1_i8_u16
    [0x00020200, 0x00A00008, 0x00000000, 0x00000000] 9568 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_u8_t0_mtx0_1_dir_flt
    [0x00010200, 0x01200000, 0x00000000, 0x00000000] 4680 {
        bounds_prepare;
        position<Index8, u8, 2>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00022A06, 0x00E16C07, 0x80000000, 0x00000000] 3432 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022200, 0x00A16007, 0x00000000, 0x00000000] 2496 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2200, 0x00E16007, 0x00000007, 0x00000000] 2080 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022200, 0x00216007, 0x00000000, 0x00000000] 1872 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022200, 0x00E16007, 0x00000000, 0x00000000] 1248 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_2_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022200, 0x00E16006, 0x00000000, 0x00000000] 416 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s8
    [0x00022200, 0x00616007, 0x00000000, 0x00000000] 312 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_dir_u8
    [0x00010100, 0x00200009, 0x00000000, 0x00000000] 208 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Direct, u8, 2>;
    }
}
