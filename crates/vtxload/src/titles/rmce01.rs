// Generated by vtxgen from a descriptor profile of RMCE01.

crate::specialize::specialize! {
    "RMCE01";

    p_mtx0_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u16
    [0x000F2300, 0x00E16009, 0x00000005, 0x00000000] 65462295 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022300, 0x00E16009, 0x00000000, 0x00000000] 61121945 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00032F06, 0x00E16C09, 0x80000000, 0x00000000] 53548626 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F2300, 0x00E16009, 0x00000007, 0x00000000] 47390145 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i16_s16
    [0x00032300, 0x00E16009, 0x00000000, 0x00000000] 40288985 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16
    [0x00032F00, 0x00E16C09, 0x00000000, 0x00000000] 39483072 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_0_i8_565_t0_mtx0_1_i16_s16
    [0x00032F00, 0x00E00C09, 0x00000000, 0x00000000] 25413967 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022200, 0x00E16009, 0x00000000, 0x00000000] 25078869 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00C07, 0x00000000, 0x00000000] 24474720 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16C07, 0x00000000, 0x00000000] 22997595 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16
    [0x00000A00, 0x00000C07, 0x00000000, 0x00000000] 22791708 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00C07, 0x00000000, 0x00000000] 16303836 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022B00, 0x00E16C09, 0x00000000, 0x00000000] 15314220 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16C09, 0x00000000, 0x00000000] 15076425 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_u16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00032F06, 0x00A16C09, 0x80000000, 0x00000000] 14360409 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, u16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_u16
    [0x00032F00, 0x00A16C09, 0x00000000, 0x00000000] 11968268 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_s8_nrm_0_0_i8_s8
    [0x00000A00, 0x00000403, 0x00000000, 0x00000000] 10716288 {
        bounds_prepare;
        position<Index8, i8, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00022A06, 0x00E16C09, 0x80000000, 0x00000000] 10257478 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt_t1_mtx1_0_inv_u8
    [0x00032F02, 0x01217009, 0x80000000, 0x00000000] 9523580 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_matrix_only;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16
    [0x00000A00, 0x00000C09, 0x00000000, 0x00000000] 8469344 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A16C09, 0x00000000, 0x00000000] 8191999 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E00C09, 0x00000000, 0x00000000] 7779565 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_i8_u8
    [0x00020100, 0x00200009, 0x00000000, 0x00000000] 7776312 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00022A06, 0x00A16C09, 0x80000000, 0x00000000] 7219832 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16
    [0x000A2200, 0x00E16009, 0x00000005, 0x00000000] 6729600 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8
    [0x00032F02, 0x00E16C09, 0x80000000, 0x00000000] 6075558 {
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

    p_mtx0_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i16_u16
    [0x000E2300, 0x00E16009, 0x00000005, 0x00000000] 5858460 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E00407, 0x00000000, 0x00000000] 5055426 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A16C07, 0x00000000, 0x00000000] 5051093 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i8_s8
    [0x00022300, 0x00616009, 0x00000000, 0x00000000] 5036220 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_0_i8_565_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8
    [0x00032F02, 0x00E00C09, 0x80000000, 0x00000000] 4539132 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index16, i16, 2>;
        tex_matrix_only;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8
    [0x00033F02, 0x00E16C09, 0x80000000, 0x00000000] 4305840 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_matrix_only;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A00C07, 0x00000000, 0x00000000] 3764878 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00C09, 0x00000000, 0x00000000] 3609156 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00C09, 0x00000000, 0x00000000] 3528355 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A00C09, 0x00000000, 0x00000000] 3508904 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_s16
    [0x000F2300, 0x00A16009, 0x00000007, 0x00000000] 3007605 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022F00, 0x00A16C09, 0x00000000, 0x00000000] 2972568 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E00C07, 0x00000000, 0x00000000] 2844216 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022200, 0x00A16009, 0x00000000, 0x00000000] 2553840 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888
    [0x00002A00, 0x00016C09, 0x00000000, 0x00000000] 2475440 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16409, 0x00000000, 0x00000000] 2038953 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i16_s16
    [0x00032300, 0x00E16009, 0x80000000, 0x00000000] 1691988 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022F00, 0x00E16C09, 0x00000000, 0x00000000] 1662384 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16407, 0x00000000, 0x00000000] 1606736 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00407, 0x00000000, 0x00000000] 1391732 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8
    [0x00000A00, 0x00000407, 0x00000000, 0x00000000] 1315560 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A01009, 0x00000000, 0x00000000] 1304784 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16
    [0x000A2200, 0x00A16009, 0x00000007, 0x00000000] 1187975 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2200, 0x00E16009, 0x00000007, 0x00000000] 1161948 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_c0_1_i8_8888_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00032F06, 0x00E17009, 0x80000000, 0x00000000] 1098079 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E01009, 0x00000000, 0x00000000] 1023672 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_dir_s8
    [0x00010100, 0x00600009, 0x00000000, 0x00000000] 919040 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Direct, i8, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00032F06, 0x00E12C09, 0x80000000, 0x00000000] 918527 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00022F06, 0x00A16C09, 0x80000000, 0x00000000] 800074 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx1_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022200, 0x00E16009, 0x80000000, 0x00000000] 766536 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_8888
    [0x00002A00, 0x00016409, 0x00000000, 0x00000000] 739592 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
    }

    p_mtx0_2_i8_u8_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200000, 0x00000000, 0x00000000] 734816 {
        bounds_prepare;
        position<Index8, u8, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A16407, 0x00000000, 0x00000000] 733045 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00216C07, 0x00000000, 0x00000000] 570360 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00216C09, 0x00000000, 0x00000000] 527000 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_t0_mtx0_1_dir_flt
    [0x00010200, 0x01200007, 0x00000000, 0x00000000] 467064 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_565
    [0x00002A00, 0x00000C09, 0x00000000, 0x00000000] 429028 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
    }

    p_mtx0_2_i8_s8_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200402, 0x00000000, 0x00000000] 230632 {
        bounds_prepare;
        position<Index8, i8, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i16_u16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00032A06, 0x00A16C09, 0x80000000, 0x00000000] 222464 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, u16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00020A06, 0x00A00C09, 0x80000000, 0x00000000] 206192 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_2_i8_flt_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200008, 0x00000000, 0x00000000] 155072 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_8888
    [0x00002A00, 0x00016407, 0x00000000, 0x00000000] 118100 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_t0_mtx0_1_i8_flt
    [0x00020A00, 0x01200C09, 0x00000000, 0x00000000] 95040 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A16409, 0x00000000, 0x00000000] 94480 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200407, 0x00000000, 0x00000000] 68520 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00022A06, 0x00E16C07, 0x80000000, 0x00000000] 61980 {
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

    p_mtx0_2_i8_u8
    [0x00000200, 0x00000000, 0x00000000, 0x00000000] 57452 {
        bounds_prepare;
        position<Index8, u8, 2>;
        bounds_update;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx1_0_inv_u8
    [0x00022A02, 0x00A16C07, 0x80000000, 0x00000000] 55714 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_matrix_only;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E17007, 0x00000000, 0x00000000] 53150 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00200C09, 0x00000000, 0x00000000] 46088 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022A00, 0x01216C09, 0x00000000, 0x00000000] 34320 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_u8_t0_mtx0_1_i8_u8_t1_mtx0_1_dir_flt
    [0x00060200, 0x00200000, 0x00000009, 0x00000000] 34284 {
        bounds_prepare;
        position<Index8, u8, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_2_i8_s16_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200006, 0x00000000, 0x00000000] 34260 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16C09, 0x80000000, 0x00000000] 25988 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A16408, 0x00000000, 0x00000000] 25648 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_dir_s16_t0_mtx0_1_dir_flt
    [0x00010100, 0x01200007, 0x00000000, 0x00000000] 23812 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_dir_flt
    [0x00010A00, 0x01200C06, 0x00000000, 0x00000000] 23180 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_s8
    [0x00022A00, 0x00616409, 0x00000000, 0x00000000] 16852 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_2_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022200, 0x00216008, 0x00000000, 0x00000000] 14564 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00407, 0x00000000, 0x00000000] 11632 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i8_8888
    [0x00002300, 0x00016009, 0x00000000, 0x00000000] 6842 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A12407, 0x00000000, 0x00000000] 6088 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_0_i8_565_t0_mtx0_1_i16_u16
    [0x00032F00, 0x00A00C09, 0x00000000, 0x00000000] 4960 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022B00, 0x00A16C09, 0x00000000, 0x00000000] 4832 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00200C07, 0x00000000, 0x00000000] 928 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00409, 0x00000000, 0x00000000] 184 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00022A06, 0x00A16C07, 0x80000000, 0x00000000] 116 {
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

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00216407, 0x00000000, 0x00000000] 51 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8
    [0x00000A00, 0x00000409, 0x00000000, 0x00000000] 44 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
    }
}
