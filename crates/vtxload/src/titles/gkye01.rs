// Generated by vtxgen from a descriptor profile of GKYE01.

crate::specialize::specialize! {
    "GKYE01";

    p_mtx0_3_i16_flt_c0_1_dir_8888_t0_mtx0_1_i16_flt
    [0x00031300, 0x01216009, 0x00000000, 0x00000000] 141489092 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F0F00, 0x00E00407, 0x80000007, 0x00000000] 8228703 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16
    [0x00000200, 0x00000007, 0x00000000, 0x00000000] 4640011 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i8_u16
    [0x00020F00, 0x00A00C07, 0x80000000, 0x00000000] 3468050 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E00407, 0x80000000, 0x00000000] 3411473 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_0_dir_565_t0_mtx0_1_i8_u8
    [0x00021200, 0x00200009, 0x00000000, 0x00000000] 1771142 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Direct, Rgb565>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i16_s16_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F0300, 0x00E00007, 0x00000007, 0x00000000] 1132629 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx1_0_inv_u8
    [0x00000F01, 0x00000C07, 0x80000000, 0x00000000] 1071890 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_matrix_only;
    }

    p_mtx0_3_i16_flt_c0_1_dir_8888
    [0x00001300, 0x00016009, 0x00000000, 0x00000000] 1009505 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_i8_s16
    [0x00020200, 0x00E00009, 0x00000000, 0x00000000] 877740 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_dir_8888
    [0x00001200, 0x00016009, 0x00000000, 0x00000000] 684544 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
    }

    p_mtx0_3_i8_s16_c0_1_dir_8888_t0_mtx0_1_i8_u16
    [0x00021200, 0x00A16007, 0x00000000, 0x00000000] 668648 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_s16_t0_mtx0_1_i8_s16
    [0x00020300, 0x00E00007, 0x00000000, 0x00000000] 663148 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_i8_u8
    [0x00020100, 0x00200009, 0x00000000, 0x00000000] 645772 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s8_t0_mtx0_1_i8_s16
    [0x00020F00, 0x00E00407, 0x00000000, 0x00000000] 602804 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200009, 0x00000000, 0x00000000] 555434 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00407, 0x80000000, 0x00000000] 547840 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i16_flt
    [0x00030300, 0x01200009, 0x00000000, 0x00000000] 526034 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i8_s16_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200007, 0x00000000, 0x00000000] 427342 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i8_u16
    [0x00020300, 0x00A00009, 0x00000000, 0x00000000] 419687 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_t0_mtx0_1_i8_u16
    [0x00020200, 0x00A00007, 0x00000000, 0x00000000] 390274 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx1_0_inv_u8
    [0x00000F01, 0x00000407, 0x80000000, 0x00000000] 362564 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_matrix_only;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx0_1_i8_s8
    [0x00020F00, 0x00600407, 0x80000000, 0x00000000] 359556 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00407, 0x00000000, 0x00000000] 234208 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s8_c0_1_dir_8888_t0_mtx0_1_i8_u16
    [0x00021A00, 0x00A16407, 0x80000000, 0x00000000] 216972 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Direct, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_i8_u8
    [0x00021100, 0x00216009, 0x00000000, 0x00000000] 203988 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i16_s16_c0_1_dir_8888_t0_mtx0_1_i16_s16
    [0x00031300, 0x00E16007, 0x00000000, 0x00000000] 173464 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_dir_8888
    [0x00001200, 0x00016007, 0x00000000, 0x00000000] 167760 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
    }

    p_mtx1_3_i16_s8_nrm_0_0_i8_s8_t0_mtx0_1_i8_u16
    [0x00020B00, 0x00A00403, 0x80000000, 0x00000000] 149920 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i8, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_s8
    [0x00020A00, 0x00600407, 0x80000000, 0x00000000] 139879 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s8_c0_1_dir_8888_t0_mtx0_1_i8_s16
    [0x00021A00, 0x00E16407, 0x80000000, 0x00000000] 134034 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Direct, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_flt_c0_1_i8_8888
    [0x00002300, 0x00016009, 0x80000000, 0x00000000] 130326 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
    }

    p_mtx1_3_i16_s16_c0_1_dir_8888_t0_mtx0_1_i16_s16
    [0x00031300, 0x00E16007, 0x80000000, 0x00000000] 108700 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s8_t0_mtx0_1_i16_flt
    [0x00030B00, 0x01200409, 0x00000000, 0x00000000] 106288 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx0_1_i8_s16
    [0x00020F00, 0x00E00407, 0x80000000, 0x00000000] 92682 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_s16_c0_0_dir_565_t0_mtx0_1_i8_u16
    [0x00021300, 0x00A00007, 0x00000000, 0x00000000] 85844 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Direct, Rgb565>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_s8_nrm_0_0_i8_s8_c0_1_dir_8888_t0_mtx0_1_i8_u16
    [0x00021B00, 0x00A16403, 0x80000000, 0x00000000] 82422 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i8, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Direct, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_s16_c0_1_dir_6666_t0_mtx0_1_i8_s16
    [0x00021300, 0x00E12007, 0x00000000, 0x00000000] 79488 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Direct, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_i8_u16
    [0x00020200, 0x00A00009, 0x00000000, 0x00000000] 73914 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_dir_8888_t0_mtx0_1_i8_u8
    [0x00021200, 0x00216007, 0x00000000, 0x00000000] 72816 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_dir_6666_t0_mtx0_1_i8_u8
    [0x00021200, 0x00212007, 0x00000000, 0x00000000] 66003 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Direct, Rgba6666>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i8_flt_t0_mtx0_1_i8_u16
    [0x00020200, 0x00A00009, 0x80000000, 0x00000000] 63280 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200407, 0x80000000, 0x00000000] 58184 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i16_flt_t0_mtx0_1_i8_u16
    [0x00020300, 0x00A00009, 0x80000000, 0x00000000] 55800 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_s16_c0_0_dir_565
    [0x00001300, 0x00000007, 0x80000000, 0x00000000] 38480 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Direct, Rgb565>;
    }

    p_mtx0_3_i16_flt_c0_1_dir_8888_t0_mtx0_1_i8_u16
    [0x00021300, 0x00A16009, 0x00000000, 0x00000000] 26932 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s8_nrm_0_0_i8_s8_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00403, 0x80000000, 0x00000000] 25602 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i8, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_dir_8888_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A1200, 0x00A16007, 0x00000005, 0x00000000] 24585 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_dir_8888_t0_mtx0_1_i8_s16
    [0x00021200, 0x00E16007, 0x00000000, 0x00000000] 22088 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_dir_8888_t0_mtx0_1_i8_u16
    [0x00021200, 0x00A16009, 0x00000000, 0x00000000] 21449 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_u8
    [0x00011100, 0x00216009, 0x00000000, 0x00000000] 20836 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200407, 0x00000000, 0x00000000] 20416 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_dir_4444
    [0x00001200, 0x0000E007, 0x00000000, 0x00000000] 19304 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Direct, Rgba4444>;
    }

    p_mtx0_3_i8_s8_nrm_0_0_i8_s8_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00403, 0x00000000, 0x00000000] 18790 {
        bounds_prepare;
        position<Index8, i8, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_c0_1_dir_6666_t0_mtx0_1_i8_u8
    [0x00021200, 0x00212007, 0x80000000, 0x00000000] 13254 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Direct, Rgba6666>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i8_s16
    [0x00020300, 0x00E00009, 0x00000000, 0x00000000] 13104 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_dir_6666
    [0x00001200, 0x00012007, 0x00000000, 0x00000000] 12906 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Direct, Rgba6666>;
    }

    p_mtx0_3_i16_s8_c0_1_dir_8888
    [0x00001300, 0x00016003, 0x00000000, 0x00000000] 11628 {
        bounds_prepare;
        position<Index16, i8, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
    }

    p_mtx0_3_i16_s8_nrm_0_0_i8_s8_t0_mtx0_1_i8_u16
    [0x00020B00, 0x00A00403, 0x00000000, 0x00000000] 8878 {
        bounds_prepare;
        position<Index16, i8, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_t0_mtx0_1_i8_u8
    [0x00020200, 0x00200007, 0x80000000, 0x00000000] 8534 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_c0_0_dir_565_t0_mtx0_1_i8_u8
    [0x00021200, 0x00200007, 0x00000000, 0x00000000] 7980 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Direct, Rgb565>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_t0_mtx0_1_i8_s8
    [0x00020200, 0x00600007, 0x00000000, 0x00000000] 7792 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_dir_6666
    [0x00001A00, 0x00012407, 0x00000000, 0x00000000] 7095 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Direct, Rgba6666>;
    }

    p_mtx0_3_i8_flt_c0_1_dir_8888_t0_mtx0_1_i8_u8
    [0x00021200, 0x00216009, 0x00000000, 0x00000000] 5304 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A0200, 0x00A00009, 0x00000005, 0x00000000] 5229 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_dir_8888_t0_mtx0_1_i8_s16
    [0x00021A00, 0x00E16407, 0x00000000, 0x00000000] 3514 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Direct, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_t0_mtx0_1_i8_s16
    [0x00020200, 0x00E00007, 0x80000000, 0x00000000] 2615 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_i8_flt
    [0x00020200, 0x01200009, 0x00000000, 0x00000000] 1841 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A0300, 0x00A00009, 0x00000005, 0x00000000] 1112 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8
    [0x000A0300, 0x00200009, 0x00000001, 0x00000000] 1080 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8
    [0x000A0200, 0x00200007, 0x00000001, 0x00000000] 684 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }
}
