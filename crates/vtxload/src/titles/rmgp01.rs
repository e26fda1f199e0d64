// Generated by vtxgen from a descriptor profile of RMGP01.

crate::specialize::specialize! {
    "RMGP01";

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F1100, 0x01216009, 0x00000009, 0x00000000] 2883600 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_s16
    [0x00033F00, 0x00E16C07, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16
    [0x00000F00, 0x00000C07, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_s16
    [0x00033F00, 0x00E16C07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E00C07, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s8_t0_mtx0_1_i8_s8
    [0x00020200, 0x00600003, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i8, 3>;
        bounds_update;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16
    [0x00000F00, 0x00000C07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_s16
    [0x00033F00, 0x00E16C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_s16
    [0x00033300, 0x00E16007, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E00C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_s16
    [0x00033300, 0x00E16009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8
    [0x00033F02, 0x00E16C07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_matrix_only;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_dir_flt
    [0x00010100, 0x01200009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx1_1_i16_s16
    [0x00033F01, 0x00E16C07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord_matrix<Index16, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i16_8888
    [0x00003F00, 0x00016C07, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
    }

    p_mtx0_3_dir_flt_nrm_0_0_dir_flt
    [0x00000500, 0x00001009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, f32, 1>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt
    [0x00050100, 0x01200009, 0x00000009, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_dir_flt
    [0x00000100, 0x00000009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8_t2_mtx1_0_inv_u8
    [0x00033F06, 0x00E16C07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_matrix_only;
        tex_matrix_only;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt_t2_mtx0_1_i16_flt_t3_mtx0_1_i16_flt
    [0x00FF1100, 0x01216009, 0x00241209, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx1_1_i16_s16_t1_mtx1_0_inv_u8
    [0x00033F03, 0x00E16C07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        tex_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord_matrix<Index16, i16, 2>;
        tex_matrix_only;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_u16
    [0x00011100, 0x00A16009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, u16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E00C07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_2_dir_flt_t0_mtx0_1_dir_flt
    [0x00010100, 0x01200008, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 2>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i16_8888
    [0x00003F00, 0x00016C07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888
    [0x00001100, 0x00016009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_s16_t2_mtx1_0_inv_u8
    [0x00033F04, 0x00E16C07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        skip_tex_coord;
        tex_matrix_only;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_i8_flt
    [0x00020100, 0x01200009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt
    [0x00011100, 0x01216008, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 2>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_2_dir_u16_t0_mtx0_1_dir_u8
    [0x00010100, 0x00200004, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, u16, 2>;
        bounds_update;
        tex_coord<Direct, u8, 2>;
    }

    p_mtx0_2_dir_u16_t0_mtx0_1_dir_flt
    [0x00010100, 0x01200004, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, u16, 2>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16
    [0x00000F00, 0x00000C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt
    [0x00011100, 0x01216009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_s16_t1_mtx1_0_inv_u8
    [0x00030F02, 0x00E00C07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, i16, 2>;
        tex_matrix_only;
    }

    p_mtx0_2_dir_u16
    [0x00000100, 0x00000004, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, u16, 2>;
        bounds_update;
    }

    p_mtx0_2_dir_flt_c0_1_dir_8888
    [0x00001100, 0x00016008, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 2>;
        bounds_update;
        color<Direct, Rgba8888>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_s16
    [0x00011100, 0x00E16009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F3F00, 0x00E16C07, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_2_dir_u16_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt
    [0x00050100, 0x01200004, 0x00000009, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, u16, 2>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_2_dir_flt
    [0x00000100, 0x00000008, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 2>;
        bounds_update;
    }

    p_mtx0_2_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_s16
    [0x00011100, 0x00E16008, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 2>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_2_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt
    [0x00051100, 0x01216008, 0x00000009, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 2>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F3F00, 0x00E16C09, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_s16_c0_1_i16_8888
    [0x00003300, 0x00016007, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_8888
    [0x00003F00, 0x00016C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
    }
}
