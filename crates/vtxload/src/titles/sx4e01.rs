// Generated by vtxgen from a descriptor profile of SX4E01.

crate::specialize::specialize! {
    "SX4E01";

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_0_i16_8888_t0_mtx0_1_i16_flt
    [0x00033F00, 0x01214C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgb888x>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_6666_t0_mtx0_1_i16_s16
    [0x00033F00, 0x00E12C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba6666>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16
    [0x00032F00, 0x00E12C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_s16
    [0x00032F00, 0x00E0EC07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_8888_t0_mtx0_1_i8_flt
    [0x00022A00, 0x01214C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16
    [0x00032B00, 0x00E12C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_0_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F3F00, 0x01214C09, 0x00000009, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgb888x>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16
    [0x003F3F00, 0x00E12C09, 0x00000E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_1_i16_s16
    [0x00FF3F00, 0x00E12C09, 0x001C0E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_u16
    [0x00032F00, 0x00A0EC07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E12C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_0_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt_t2_mtx0_1_i16_flt
    [0x003F3F00, 0x01214C09, 0x00001209, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgb888x>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A0EC09, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_c0_0_i8_6666_t0_mtx0_1_i8_flt
    [0x00022200, 0x01210009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba6666>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt_t2_mtx0_1_i8_flt
    [0x002A2A00, 0x01214C09, 0x00001209, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A0EC09, 0x80000005, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_s16
    [0x00032F00, 0x00E0EC07, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E0EC07, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A0EC07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_1_i16_s16
    [0x00FF2F00, 0x00E12C09, 0x001C0E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A0EC07, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F2F00, 0x00E0EC09, 0x80000007, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_u16
    [0x000F2F00, 0x00A0EC09, 0x80000005, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022B00, 0x00E12C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E0EC07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_dir_flt_c0_0_dir_565_t0_mtx0_1_i8_flt
    [0x00021100, 0x01200009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgb565>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A0EC07, 0x80000005, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_s16
    [0x00032F00, 0x00E0EC09, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_1_i16_s16
    [0x00FF2B00, 0x00E12C09, 0x001C0E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022F00, 0x00A0EC07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00E12C09, 0x00000E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022F00, 0x00E12C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E12C09, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s8_t0_mtx0_1_dir_flt
    [0x00010200, 0x01200003, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i8, 3>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022F00, 0x00E0EC09, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i8_s16
    [0x002F2F00, 0x00E12C09, 0x00000E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022300, 0x00A12009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022F00, 0x00A0EC09, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s8_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt
    [0x00050200, 0x01200003, 0x00000009, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i8, 3>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022B00, 0x00E12409, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E0EC09, 0x80000007, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F2F00, 0x00E12C09, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F2B00, 0x00E12C09, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i16_s16
    [0x00032A00, 0x00E0EC07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00A12C07, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_s16
    [0x000F2F00, 0x00A0EC07, 0x80000007, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2F00, 0x00E0EC09, 0x80000007, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A12C07, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022200, 0x00A0E007, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_u16_t1_mtx1_1_i16_u16_t2_mtx0_1_i16_s16
    [0x003F2F02, 0x00A0EC07, 0x80000E05, 0x00000000] 0 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, u16, 2>;
        tex_coord_matrix<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E12409, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16
    [0x00AA2A00, 0x00A12C09, 0x001C0E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_1_i16_s16_t4_mtx0_1_i16_s16_t5_mtx0_1_i16_s16_t6_mtx0_1_i16_s16_t7_mtx0_1_i16_s16
    [0xFFFF2B00, 0x00A12C09, 0x381C0E07, 0x0381C0E0] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_dir_flt_c0_0_i16_8888_t0_mtx0_1_i8_flt
    [0x00023100, 0x01214009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Index16, Rgb888x>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A12409, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E0EC09, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16
    [0x003E2B00, 0x00A12C09, 0x00000E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E12C07, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16_t4_mtx0_1_i8_s16
    [0x02AA2A00, 0x00E12C09, 0x381C0E05, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2F00, 0x00A0EC09, 0x80000005, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2F00, 0x00E12C09, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16
    [0x00AA2A00, 0x00E12C09, 0x001C0E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A0EC09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00E12C07, 0x00000E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt_t2_mtx0_1_i8_flt_t3_mtx0_1_i8_flt
    [0x00AA2A00, 0x01214C09, 0x00241209, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16
    [0x00032A00, 0x00E12C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_u16
    [0x002A2A00, 0x00E12C07, 0x00000A07, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i16_s16
    [0x003A2B00, 0x00E12C09, 0x00000E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A0EC09, 0x00000005, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_1_i8_s16
    [0x00BE2A00, 0x00E12C09, 0x001C0E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_0_i16_8888_t0_mtx0_1_i16_flt
    [0x00033F00, 0x01215009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index16, Rgb888x>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00E12C07, 0x00000005, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_c0_0_i8_8888_t0_mtx0_1_i8_flt
    [0x00022200, 0x01214009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A12C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16
    [0x003F2F00, 0x00A0EC07, 0x80000E07, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A0E407, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E0EC09, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E12C07, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E0EC07, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16
    [0x000A2F00, 0x00A0EC07, 0x80000007, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F2B00, 0x00E0EC07, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022F00, 0x00E0EC07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16
    [0x002A2A00, 0x00A12C09, 0x00000A05, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022200, 0x00A12009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00A12C09, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A2A00, 0x01214C09, 0x00000009, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022B00, 0x00A0EC07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00E0EC07, 0x00000E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022E00, 0x00A0EC07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_dir_s16_c0_1_dir_8888_t0_mtx0_1_dir_flt
    [0x00011100, 0x01216007, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx1_1_i8_s16_t3_mtx0_1_i8_u16
    [0x00AA2F04, 0x00A0EC07, 0x80140E05, 0x00000000] 0 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord_matrix<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_u16_t4_mtx0_1_i8_u16
    [0x02AA2A00, 0x00E12C09, 0x28140E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2200, 0x00A0E007, 0x00000005, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_c0_0_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt_t2_mtx0_1_i8_flt
    [0x002A2200, 0x01214009, 0x00001209, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00E12409, 0x00000E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_u16
    [0x002A2A00, 0x00A0EC07, 0x80000A07, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_c0_0_i16_8888_t0_mtx0_1_i16_flt
    [0x00033300, 0x01214009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgb888x>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_dir_u8
    [0x00010100, 0x00200009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Direct, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16
    [0x00AA2A00, 0x00E0EC07, 0x001C0E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022200, 0x01216009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx1_1_i8_s16_t3_mtx0_1_i8_u16
    [0x00AA2A04, 0x00A0EC07, 0x80140E05, 0x00000000] 0 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord_matrix<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00A0EC07, 0x00000E05, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A2A00, 0x01217009, 0x00000009, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt
    [0x00051100, 0x01216009, 0x00000009, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022B00, 0x00E0EC07, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8
    [0x000A2A00, 0x0020EC09, 0x00000001, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_u8_t4_mtx0_1_i8_s16
    [0x02AA2A00, 0x00E12C09, 0x38040E07, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00212C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_s16
    [0x000F2A00, 0x00A0EC07, 0x80000007, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E12409, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A0E409, 0x80000005, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_u8
    [0x00011100, 0x00216009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_u16
    [0x002A2A00, 0x00A12C09, 0x00000A07, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00212409, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E0E407, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022F00, 0x00A0EC07, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AA2A00, 0x00A0EC07, 0x00140A05, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_s8
    [0x00022A00, 0x0060E407, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx0_2_i8_s16_c0_1_i8_4444
    [0x00002200, 0x0000E006, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 2>;
        bounds_update;
        color<Index8, Rgba4444>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00A0EC07, 0x00000007, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_2_dir_flt_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt
    [0x00050100, 0x01200008, 0x00000009, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, f32, 2>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_u16
    [0x00032F00, 0x00A0EC09, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2B00, 0x00E0EC09, 0x80000007, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_dir_s16
    [0x00000100, 0x00000007, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A0EC07, 0x00000005, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2F00, 0x00A0EC07, 0x80000005, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u8
    [0x00022200, 0x0020E007, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E0E407, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E0EC07, 0x80000007, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2F00, 0x00A0EC07, 0x00000005, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00E12C09, 0x00000E05, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_u16
    [0x00AA2A00, 0x00A0EC07, 0x00140E05, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u8
    [0x00022A00, 0x0020EC07, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A0E407, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00A0EC07, 0x80000007, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u8
    [0x00022A00, 0x0020E407, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00E0EC07, 0x00000005, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A0E409, 0x00000005, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022200, 0x00A0E007, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022200, 0x00A16009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022A00, 0x01217009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022200, 0x00E16009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_8888_t0_mtx0_1_i8_flt
    [0x00022A00, 0x01214C09, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_8888
    [0x00002A00, 0x00016C09, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba8888>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022E00, 0x00E0EC07, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00212407, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00212408, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u8
    [0x00022A00, 0x0020E407, 0x80000000, 0x00000000] 0 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16_t4_mtx0_1_i8_s16_t5_mtx0_1_i8_s16
    [0x0AAA2A00, 0x00E12409, 0x381C0E07, 0x000000E0] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8
    [0x000A2A00, 0x0020E407, 0x00000001, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_dir_s16_t0_mtx0_1_dir_flt
    [0x00010100, 0x01200007, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022200, 0x00E0E007, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_dir_s16_t0_mtx0_1_dir_s16
    [0x00010100, 0x00E00007, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022200, 0x00216009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }
}
