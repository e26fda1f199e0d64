// Generated by vtxgen from a descriptor profile of RSBP01.

crate::specialize::specialize! {
    "RSBP01";

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt_t1_mtx1_0_inv_u8
    [0x00032F02, 0x01217009, 0x80000000, 0x00000000] 30974039 {
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

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888
    [0x00002A00, 0x00017009, 0x00000000, 0x00000000] 2575754 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_0_i8_565
    [0x00002F00, 0x00000C09, 0x80000000, 0x00000000] 1925770 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgb565>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022E00, 0x01217009, 0x00000000, 0x00000000] 1767558 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx1_0_inv_u8
    [0x00022A02, 0x01217009, 0x80000000, 0x00000000] 1625397 {
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

    p_mtx0_2_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_flt
    [0x00020A00, 0x01201008, 0x00000000, 0x00000000] 1324076 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt_t2_mtx0_1_i8_flt
    [0x002A2A00, 0x01217009, 0x00001209, 0x00000000] 1070190 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt
    [0x00032A00, 0x01217009, 0x80000000, 0x00000000] 895442 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_2_i16_flt_nrm_0_0_i8_flt
    [0x00000B00, 0x00001008, 0x00000000, 0x00000000] 525600 {
        bounds_prepare;
        position<Index16, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
    }

    p_mtx0_2_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_flt
    [0x00020B00, 0x01201008, 0x00000000, 0x00000000] 315040 {
        bounds_prepare;
        position<Index16, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt_t2_mtx0_1_i8_flt_t3_mtx0_1_i8_flt
    [0x00AA2A00, 0x01217009, 0x00241209, 0x00000000] 267388 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_0_i8_565
    [0x00002A00, 0x00000C07, 0x00000000, 0x00000000] 205232 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb565>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022B00, 0x01217009, 0x80000000, 0x00000000] 199470 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_s16_t0_mtx0_1_i8_u16
    [0x00020200, 0x00A00006, 0x00000000, 0x00000000] 166356 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A0A00, 0x00A00C07, 0x00000005, 0x00000000] 145656 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888
    [0x00002A00, 0x00017008, 0x00000000, 0x00000000] 95860 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022A00, 0x01217008, 0x00000000, 0x00000000] 79491 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_s8_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200002, 0x00000000, 0x00000000] 30036 {
        bounds_prepare;
        position<Index8, i8, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_i8_s16_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022200, 0x00216006, 0x00000000, 0x00000000] 27333 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_i8_flt_t0_mtx0_1_i8_flt
    [0x00020200, 0x01200008, 0x00000000, 0x00000000] 23029 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_s16_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8
    [0x000A0200, 0x00200006, 0x00000001, 0x00000000] 18384 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_2_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_flt
    [0x00020A00, 0x01201008, 0x80000000, 0x00000000] 17440 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_u16_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200004, 0x00000000, 0x00000000] 15716 {
        bounds_prepare;
        position<Index8, u16, 2>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_i8_s8_t0_mtx0_1_i8_u16
    [0x00020200, 0x00A00002, 0x00000000, 0x00000000] 6594 {
        bounds_prepare;
        position<Index8, i8, 2>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00200406, 0x00000000, 0x00000000] 5762 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A0A00, 0x01201009, 0x00000009, 0x00000000] 4360 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A0A00, 0x01201008, 0x00000009, 0x00000000] 3500 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022200, 0x01216008, 0x00000000, 0x00000000] 2736 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_s8
    [0x00020A00, 0x00600406, 0x00000000, 0x00000000] 2160 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_2_i8_s16_c0_1_i8_8888
    [0x00002200, 0x00016006, 0x00000000, 0x00000000] 1812 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        color<Index8, Rgba8888>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A00406, 0x00000000, 0x00000000] 768 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_flt
    [0x00000200, 0x00000008, 0x00000000, 0x00000000] 704 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_s8
    [0x00022A00, 0x00600407, 0x00000000, 0x00000000] 704 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00406, 0x00000000, 0x00000000] 660 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A00408, 0x00000000, 0x00000000] 336 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_s8_t0_mtx0_1_i8_s8
    [0x00020A00, 0x00600408, 0x00000000, 0x00000000] 224 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00406, 0x00000000, 0x00000000] 216 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_i8_flt_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A0200, 0x01200008, 0x00000009, 0x00000000] 200 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_0_i8_565_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00200407, 0x00000000, 0x00000000] 140 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s8_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200403, 0x00000000, 0x00000000] 120 {
        bounds_prepare;
        position<Index8, i8, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200406, 0x00000000, 0x00000000] 48 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }
}
