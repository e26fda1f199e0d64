// Generated by vtxgen from a descriptor profile of GSAE01.

crate::specialize::specialize! {
    "GSAE01";

    p_mtx0_3_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_s16
    [0x00032300, 0x00E0E007, 0x00000000, 0x00000000] 316201745 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Index8, Rgba4444>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx1_1_i16_s16_t7_mtx1_0_inv_u8
    [0x00030F81, 0x00E00407, 0x80000000, 0x00000000] 310430468 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord_matrix<Index16, i16, 2>;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx1_1_i16_s16_t1_mtx1_0_inv_u8
    [0x00030F03, 0x00E00407, 0x80000000, 0x00000000] 263714457 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord_matrix<Index16, i16, 2>;
        tex_matrix_only;
    }

    p_mtx1_3_i16_s16_c0_1_dir_4444
    [0x00001300, 0x0000E007, 0x80000000, 0x00000000] 215111129 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Direct, Rgba4444>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx1_1_i16_s16_t6_mtx1_0_inv_u8_t7_mtx1_0_inv_u8
    [0x00030FC1, 0x00E00407, 0x80000000, 0x00000000] 19145054 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord_matrix<Index16, i16, 2>;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx1_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F0F01, 0x00E00407, 0x80000007, 0x00000000] 18463890 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord_matrix<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16_t0_mtx0_1_i8_s16
    [0x00020200, 0x00E00007, 0x00000000, 0x00000000] 9164116 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_t0_mtx0_1_i8_s16
    [0x00020200, 0x00E00007, 0x80000000, 0x00000000] 7422576 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx1_1_i16_s16
    [0x00030F01, 0x00E00407, 0x80000000, 0x00000000] 7273824 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord_matrix<Index16, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s8_t0_mtx1_1_i8_s16
    [0x00020A01, 0x00E00407, 0x80000000, 0x00000000] 5941354 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord_matrix<Index8, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E00407, 0x80000000, 0x00000000] 2785028 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_dir_s16_t0_mtx0_1_dir_flt
    [0x00010100, 0x01200007, 0x80000000, 0x00000000] 2256156 {
        pos_matrix;
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx1_1_i16_s16_t1_mtx0_1_i16_s16_t7_mtx1_0_inv_u8
    [0x000F0F81, 0x00E00407, 0x80000007, 0x00000000] 2084914 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord_matrix<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
    }

    p_mtx1_3_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022200, 0x00E0E007, 0x80000000, 0x00000000] 1941912 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i16_s8_t0_mtx0_1_i8_s16
    [0x00020E00, 0x00E00407, 0x80000000, 0x00000000] 1213232 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_dir_s16_nrm_0_0_dir_u8
    [0x00000500, 0x00000007, 0x00000000, 0x00000000] 737624 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        normal<Direct, u8, 1>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx1_1_i16_s16_t1_mtx1_1_i16_s16
    [0x000F0F03, 0x00E00407, 0x80000007, 0x00000000] 564972 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord_matrix<Index16, i16, 2>;
        tex_coord_matrix<Index16, i16, 2>;
    }

    p_mtx0_3_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F2300, 0x00E0E007, 0x00000007, 0x00000000] 261724 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Index8, Rgba4444>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s8_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00407, 0x80000000, 0x00000000] 257600 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s8_t0_mtx0_1_i8_s16
    [0x00020F00, 0x00E00407, 0x00000000, 0x00000000] 139464 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_s16_t0_mtx0_1_i8_s16
    [0x00020300, 0x00E00007, 0x00000000, 0x00000000] 85432 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s8_t0_mtx1_1_i16_s16_t1_mtx0_1_i16_s16_t6_mtx1_0_inv_u8_t7_mtx1_0_inv_u8
    [0x000F0FC1, 0x00E00407, 0x80000007, 0x00000000] 55356 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord_matrix<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        skip_tex_coord;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx1_3_dir_s16_c0_1_dir_8888_t0_mtx0_1_dir_s16
    [0x00011100, 0x00E16007, 0x80000000, 0x00000000] 18400 {
        pos_matrix;
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, i16, 2>;
    }
}
