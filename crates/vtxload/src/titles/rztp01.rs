// Generated by vtxgen from a descriptor profile of RZTP01.

crate::specialize::specialize! {
    "RZTP01";

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16
    [0x00032B00, 0x00E16C09, 0x00000000, 0x00000000] 169389379 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16C09, 0x00000000, 0x00000000] 118407936 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00C07, 0x00000000, 0x00000000] 97701735 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16
    [0x00000A00, 0x00000C07, 0x00000000, 0x00000000] 89447191 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E16C07, 0x00000007, 0x00000000] 70795728 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16
    [0x00032F00, 0x00E16C09, 0x00000000, 0x00000000] 68343635 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022B00, 0x00E16C09, 0x00000000, 0x00000000] 64616127 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16C07, 0x00000000, 0x00000000] 63693806 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022B00, 0x00E17009, 0x00000000, 0x00000000] 53602208 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A16C07, 0x00000000, 0x00000000] 46791990 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_flt
    [0x000F2B00, 0x00E16C09, 0x00000009, 0x00000000] 43668978 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022B00, 0x00A16C09, 0x00000000, 0x00000000] 37909806 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16
    [0x00020B00, 0x00E01009, 0x00000000, 0x00000000] 37427230 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E16C09, 0x00000007, 0x00000000] 26572857 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022F00, 0x00E16C09, 0x00000000, 0x00000000] 24650876 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_u16
    [0x00030F00, 0x00A00C07, 0x00000000, 0x00000000] 24128744 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00022B06, 0x00E16C07, 0x80000000, 0x00000000] 23314144 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F2F00, 0x00E16C09, 0x00000007, 0x00000000] 22972634 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00C07, 0x00000000, 0x00000000] 21489620 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022F00, 0x00A16C07, 0x00000000, 0x00000000] 20299384 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00022F06, 0x00E16C07, 0x80000000, 0x00000000] 19394900 {
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

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00032F06, 0x00E16C07, 0x80000000, 0x00000000] 17014058 {
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

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A01009, 0x00000000, 0x00000000] 13006800 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00C09, 0x00000000, 0x00000000] 10983262 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i16_flt
    [0x00032B00, 0x01216C09, 0x00000000, 0x00000000] 8816262 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022B00, 0x00216409, 0x00000000, 0x00000000] 7395072 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022B00, 0x01217009, 0x00000000, 0x00000000] 5833644 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_i8_u8
    [0x00020100, 0x00200009, 0x00000000, 0x00000000] 5464428 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022E00, 0x00E16C09, 0x00000000, 0x00000000] 5464047 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022B00, 0x01216C09, 0x00000000, 0x00000000] 5224464 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A16409, 0x00000000, 0x00000000] 5022064 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_flt
    [0x00032F00, 0x01216C09, 0x00000000, 0x00000000] 4848494 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_s16
    [0x000F2B00, 0x00A17009, 0x00000007, 0x00000000] 3871500 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022200, 0x00E16009, 0x00000000, 0x00000000] 3727377 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A16C09, 0x00000000, 0x00000000] 3721958 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F2B00, 0x00E16C09, 0x00000007, 0x00000000] 3111483 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16409, 0x00000000, 0x00000000] 2992208 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022B00, 0x00216C09, 0x00000000, 0x00000000] 2404248 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00022F06, 0x00A16C07, 0x80000000, 0x00000000] 2280384 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16
    [0x002A2A00, 0x00A17009, 0x00000A05, 0x00000000] 2271280 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E17009, 0x00000000, 0x00000000] 2093674 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00022A06, 0x00A16C07, 0x80000000, 0x00000000] 1871640 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A17009, 0x00000000, 0x00000000] 1755080 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16C07, 0x80000000, 0x00000000] 1682217 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00409, 0x00000000, 0x00000000] 1672488 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E17007, 0x00000000, 0x00000000] 1640772 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_s8
    [0x00022F00, 0x00616C09, 0x00000000, 0x00000000] 1569248 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_2_i8_u8_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200000, 0x00000000, 0x00000000] 1424344 {
        bounds_prepare;
        position<Index8, u8, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022B00, 0x00E16407, 0x00000000, 0x00000000] 1329768 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i16_s16
    [0x00032200, 0x00E16009, 0x00000000, 0x00000000] 1261568 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022B00, 0x00E16409, 0x00000000, 0x00000000] 1203048 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16
    [0x00032A00, 0x00E16C09, 0x00000000, 0x00000000] 1187760 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s8_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00616C09, 0x00000007, 0x00000000] 1152704 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i8, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00E17009, 0x00000005, 0x00000000] 1135640 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_flt
    [0x000F2F00, 0x00E16C09, 0x00000009, 0x00000000] 998748 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16407, 0x80000000, 0x00000000] 997200 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2E00, 0x00E16C09, 0x00000007, 0x00000000] 995090 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00E16C09, 0x00000005, 0x00000000] 900536 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A16C09, 0x00000005, 0x00000000] 856864 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200C06, 0x00000000, 0x00000000] 834540 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00216C09, 0x00000000, 0x00000000] 806128 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00C09, 0x00000000, 0x00000000] 703266 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_s8
    [0x00020B00, 0x00600C07, 0x00000000, 0x00000000] 646760 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_8888
    [0x00002F00, 0x00016C07, 0x00000000, 0x00000000] 557928 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16409, 0x80000000, 0x00000000] 551100 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_t0_mtx0_1_i8_s16
    [0x00020B00, 0x00E00C09, 0x00000000, 0x00000000] 535704 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_flt
    [0x000A2A00, 0x00E16C09, 0x00000009, 0x00000000] 415510 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_s8
    [0x00022A00, 0x00616409, 0x00000000, 0x00000000] 408960 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A16409, 0x00000005, 0x00000000] 400880 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_u8_t0_mtx0_1_dir_flt
    [0x00010200, 0x01200000, 0x00000000, 0x00000000] 379964 {
        bounds_prepare;
        position<Index8, u8, 2>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022A00, 0x01216C09, 0x00000000, 0x00000000] 378274 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_u8
    [0x00000200, 0x00000000, 0x00000000, 0x00000000] 352904 {
        bounds_prepare;
        position<Index8, u8, 2>;
        bounds_update;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00A17009, 0x00000E05, 0x00000000] 351016 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16407, 0x00000000, 0x00000000] 344652 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A16407, 0x00000000, 0x00000000] 247113 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_s8
    [0x00022A00, 0x00616407, 0x00000000, 0x00000000] 226008 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i16_u16
    [0x00030A00, 0x00A00C07, 0x00000000, 0x00000000] 221760 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00A16C09, 0x00000007, 0x00000000] 164544 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200409, 0x00000000, 0x00000000] 150300 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00A17009, 0x00000007, 0x00000000] 103240 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i16_8888_t0_mtx0_1_i8_s16
    [0x00023300, 0x00E16009, 0x00000000, 0x00000000] 90994 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s16
    [0x00000A00, 0x00000C06, 0x00000000, 0x00000000] 60132 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i16, 1>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_flt
    [0x00020A00, 0x01201008, 0x00000000, 0x00000000] 56500 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8
    [0x00032F02, 0x00E16C09, 0x80000000, 0x00000000] 45694 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_matrix_only;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8
    [0x00000A00, 0x00000407, 0x00000000, 0x00000000] 41296 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
    }

    p_mtx0_3_i8_u16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16C05, 0x00000000, 0x00000000] 27264 {
        bounds_prepare;
        position<Index8, u16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_t0_mtx0_1_i8_flt
    [0x00020A00, 0x01200409, 0x00000000, 0x00000000] 27000 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u8
    [0x000A2A00, 0x00E16C09, 0x00000001, 0x00000000] 22920 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200406, 0x00000000, 0x00000000] 16016 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200407, 0x00000000, 0x00000000] 13072 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022E00, 0x00E16C07, 0x80000000, 0x00000000] 12042 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00A16409, 0x00000007, 0x00000000] 11725 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00407, 0x00000000, 0x00000000] 10080 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_u8_t0_mtx0_1_i8_u8_t1_mtx0_1_dir_flt
    [0x00060200, 0x00200000, 0x00000009, 0x00000000] 7748 {
        bounds_prepare;
        position<Index8, u8, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i8_s8_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200403, 0x00000000, 0x00000000] 5040 {
        bounds_prepare;
        position<Index8, i8, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00216409, 0x00000000, 0x00000000] 3672 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_u16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200405, 0x00000000, 0x00000000] 3404 {
        bounds_prepare;
        position<Index8, u16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_u16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00C05, 0x00000000, 0x00000000] 3404 {
        bounds_prepare;
        position<Index8, u16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_s8_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00216402, 0x00000000, 0x00000000] 1920 {
        bounds_prepare;
        position<Index8, i8, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00216C07, 0x00000000, 0x00000000] 1848 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s8
    [0x00022A00, 0x00616C09, 0x00000000, 0x00000000] 1353 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i8, 2>;
    }
}
