// Generated by vtxgen from a descriptor profile of RSBE01.

crate::specialize::specialize! {
    "RSBE01";

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx1_0_inv_u8
    [0x00022F02, 0x01217009, 0x80000000, 0x00000000] 38455022 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_matrix_only;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx1_0_inv_u8
    [0x00022A02, 0x01217009, 0x80000000, 0x00000000] 7230741 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_matrix_only;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_flt
    [0x00030B00, 0x01201009, 0x00000000, 0x00000000] 6180840 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022E00, 0x01217009, 0x00000000, 0x00000000] 5887298 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt
    [0x00032A00, 0x01217009, 0x80000000, 0x00000000] 5337840 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022A00, 0x01217009, 0x80000000, 0x00000000] 5012160 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i16_flt_nrm_0_0_i8_flt
    [0x00000B00, 0x00001008, 0x00000000, 0x00000000] 4818600 {
        bounds_prepare;
        position<Index16, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16
    [0x00000A00, 0x00000C07, 0x80000000, 0x00000000] 4721636 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022B00, 0x01217009, 0x00000000, 0x00000000] 4509322 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_flt
    [0x00000A00, 0x00001008, 0x00000000, 0x00000000] 4179647 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i16_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx1_0_inv_u8
    [0x00022E02, 0x01217009, 0x80000000, 0x00000000] 4134556 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_matrix_only;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_flt
    [0x00000A00, 0x00001009, 0x80000000, 0x00000000] 4047360 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
    }

    p_mtx0_2_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_flt
    [0x00020B00, 0x01201008, 0x00000000, 0x00000000] 2926946 {
        bounds_prepare;
        position<Index16, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_i8_u8
    [0x00020100, 0x00200009, 0x00000000, 0x00000000] 2097436 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt_t2_mtx0_1_i8_flt
    [0x002A2A00, 0x01217009, 0x00001209, 0x00000000] 1420936 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_c0_1_i16_8888_t0_mtx0_1_i16_flt
    [0x00033B00, 0x01217009, 0x00000000, 0x00000000] 1185444 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022A00, 0x01217008, 0x00000000, 0x00000000] 809722 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_s16_t0_mtx0_1_i8_u16
    [0x00020200, 0x00A00006, 0x00000000, 0x00000000] 583512 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16
    [0x00000A00, 0x00000C07, 0x00000000, 0x00000000] 574064 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
    }

    p_mtx0_2_i8_s16_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200006, 0x00000000, 0x00000000] 538564 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_2_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_flt
    [0x00020A00, 0x01201008, 0x80000000, 0x00000000] 263756 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00C07, 0x00000000, 0x00000000] 217600 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00C09, 0x00000000, 0x00000000] 171308 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00C07, 0x00000000, 0x00000000] 116188 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16
    [0x00032F00, 0x00E12C09, 0x00000000, 0x00000000] 108192 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888
    [0x00002A00, 0x00017008, 0x00000000, 0x00000000] 97695 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E00C07, 0x00000007, 0x00000000] 93096 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A00406, 0x00000000, 0x00000000] 73472 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_s8_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200002, 0x00000000, 0x00000000] 73372 {
        bounds_prepare;
        position<Index8, i8, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022200, 0x00216006, 0x00000000, 0x00000000] 67912 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200C07, 0x00000000, 0x00000000] 65534 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_i8_s16_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8
    [0x000A0200, 0x00200006, 0x00000001, 0x00000000] 63352 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A00407, 0x00000000, 0x00000000] 37216 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200407, 0x00000000, 0x00000000] 35440 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_i8_u16_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200004, 0x00000000, 0x00000000] 32920 {
        bounds_prepare;
        position<Index8, u16, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_i8_flt_t0_mtx0_1_i8_flt
    [0x00020200, 0x01200008, 0x00000000, 0x00000000] 31396 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A00408, 0x00000000, 0x00000000] 31104 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00200406, 0x00000000, 0x00000000] 28446 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00407, 0x00000000, 0x00000000] 26856 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_s8_t0_mtx0_1_i8_s8
    [0x00020A00, 0x00600408, 0x00000000, 0x00000000] 19880 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E16C07, 0x00000000, 0x00000000] 19252 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00200407, 0x00000000, 0x00000000] 11660 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200C09, 0x00000000, 0x00000000] 9216 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00C09, 0x00000000, 0x00000000] 8848 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888
    [0x00002A00, 0x00017009, 0x00000000, 0x00000000] 7350 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00407, 0x00000000, 0x00000000] 6672 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_s8
    [0x00020A00, 0x00600406, 0x00000000, 0x00000000] 6480 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200406, 0x00000000, 0x00000000] 5796 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_i8_flt
    [0x00020200, 0x01200009, 0x00000000, 0x00000000] 5506 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888
    [0x00002A00, 0x00016C07, 0x00000000, 0x00000000] 5290 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A16C07, 0x00000000, 0x00000000] 5208 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_s8
    [0x00020A00, 0x00600C07, 0x00000000, 0x00000000] 5120 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_t0_mtx0_1_i8_s8
    [0x00020A00, 0x00600C09, 0x00000000, 0x00000000] 5120 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E00C07, 0x00000000, 0x00000000] 5082 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s8_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200403, 0x00000000, 0x00000000] 4976 {
        bounds_prepare;
        position<Index8, i8, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A00C07, 0x00000000, 0x00000000] 4320 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E00C09, 0x00000000, 0x00000000] 3988 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A0A00, 0x01201008, 0x00000009, 0x00000000] 3560 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_s8_t0_mtx0_1_i8_u16
    [0x00020200, 0x00A00002, 0x00000000, 0x00000000] 3360 {
        bounds_prepare;
        position<Index8, i8, 2>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00406, 0x00000000, 0x00000000] 2932 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_s8
    [0x00022A00, 0x00600407, 0x00000000, 0x00000000] 2376 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_2_i8_s16_c0_1_i8_8888
    [0x00002200, 0x00016006, 0x00000000, 0x00000000] 2172 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        color<Index8, Rgba8888>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022200, 0x01216009, 0x00000000, 0x00000000] 2040 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8
    [0x00000A00, 0x00000407, 0x00000000, 0x00000000] 1836 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_flt_c0_0_i8_565
    [0x00002A00, 0x00001008, 0x00000000, 0x00000000] 1638 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgb565>;
    }

    p_mtx0_2_i8_flt
    [0x00000200, 0x00000008, 0x00000000, 0x00000000] 1216 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_flt_c0_1_i8_6666
    [0x00002A00, 0x00013008, 0x00000000, 0x00000000] 994 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba6666>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_565_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A00C09, 0x00000000, 0x00000000] 800 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_dir_u8
    [0x00010100, 0x00200009, 0x00000000, 0x00000000] 544 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Direct, u8, 2>;
    }

    p_mtx0_2_i8_flt_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A0200, 0x01200008, 0x00000009, 0x00000000] 340 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }
}
