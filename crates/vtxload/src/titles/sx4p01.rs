// Generated by vtxgen from a descriptor profile of SX4P01.

crate::specialize::specialize! {
    "SX4P01";

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_0_i16_8888_t0_mtx0_1_i16_flt
    [0x00033F00, 0x01214C09, 0x00000000, 0x00000000] 264745006 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgb888x>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_6666_t0_mtx0_1_i16_s16
    [0x00033F00, 0x00E12C09, 0x00000000, 0x00000000] 103260213 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba6666>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_8888_t0_mtx0_1_i8_flt
    [0x00022A00, 0x01214C09, 0x00000000, 0x00000000] 86397680 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16
    [0x00032F00, 0x00E12C09, 0x00000000, 0x00000000] 81317275 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F2F00, 0x00E12C09, 0x00000007, 0x00000000] 46482340 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_1_i16_s16
    [0x00FF3F00, 0x00E12C09, 0x001C0E07, 0x00000000] 34058348 {
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

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_0_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F3F00, 0x01214C09, 0x00000009, 0x00000000] 32545775 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgb888x>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A0EC09, 0x80000000, 0x00000000] 26266740 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E12C09, 0x00000000, 0x00000000] 26026816 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_1_i16_s16
    [0x00FF2F00, 0x00E12C09, 0x001C0E07, 0x00000000] 23122872 {
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

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16
    [0x00032B00, 0x00E12C09, 0x00000000, 0x00000000] 22272019 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A0EC09, 0x80000005, 0x00000000] 15426999 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_0_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt_t2_mtx0_1_i16_flt_t3_mtx0_1_i16_flt
    [0x00FF3F00, 0x01214C09, 0x00241209, 0x00000000] 15132462 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgb888x>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022F00, 0x00E12C09, 0x00000000, 0x00000000] 13788631 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_0_i8_6666_t0_mtx0_1_i8_flt
    [0x00022200, 0x01210009, 0x00000000, 0x00000000] 13612448 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba6666>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022F00, 0x00A12C09, 0x00000000, 0x00000000] 10927416 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022F00, 0x00E0EC09, 0x80000000, 0x00000000] 10228308 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2F00, 0x00A0EC09, 0x80000005, 0x00000000] 9696456 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022B00, 0x00E12C09, 0x00000000, 0x00000000] 9559326 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_dir_flt_c0_0_dir_565_t0_mtx0_1_i8_flt
    [0x00021100, 0x01200009, 0x00000000, 0x00000000] 8578272 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgb565>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E0EC07, 0x80000000, 0x00000000] 8546331 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_s16
    [0x00032F00, 0x00E0EC07, 0x80000000, 0x00000000] 8537114 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_i8_4444_t0_mtx0_1_i16_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16
    [0x002B2200, 0x00E0E007, 0x00000E07, 0x00000000] 8317120 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba4444>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_c0_0_i16_8888_t0_mtx0_1_i16_flt
    [0x00033300, 0x01214009, 0x00000000, 0x00000000] 6784550 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgb888x>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_dir_flt_c0_0_i16_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A3100, 0x01214009, 0x00000009, 0x00000000] 6396232 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Index16, Rgb888x>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022F00, 0x00A0EC09, 0x80000000, 0x00000000] 5483664 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_u16
    [0x00032F00, 0x00A0EC09, 0x80000000, 0x00000000] 5039304 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022E00, 0x00A0EC09, 0x80000000, 0x00000000] 4900500 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A0EC09, 0x00000005, 0x00000000] 4565089 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_u16
    [0x003F2F00, 0x00E12C09, 0x00000A05, 0x00000000] 4409942 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_1_i16_s16
    [0x00FF2B00, 0x00E12C09, 0x001C0E07, 0x00000000] 4099548 {
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

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A12C09, 0x00000000, 0x00000000] 4057411 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2F00, 0x00E12C09, 0x00000007, 0x00000000] 3880164 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_s16
    [0x00032F00, 0x00E0EC07, 0x00000000, 0x00000000] 3850244 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_0_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt_t2_mtx0_1_i16_flt
    [0x003F3F00, 0x01214C09, 0x00001209, 0x00000000] 3829614 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgb888x>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_6666_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_u16
    [0x000F3F00, 0x00A12C09, 0x00000005, 0x00000000] 3792294 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba6666>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_c0_0_i8_8888_t0_mtx0_1_i8_flt
    [0x00022200, 0x01214009, 0x00000000, 0x00000000] 3568508 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E0EC09, 0x00000000, 0x00000000] 3526536 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_1_i16_s16_t4_mtx0_1_i16_s16_t5_mtx0_1_i16_s16_t6_mtx0_1_i16_s16_t7_mtx0_1_i16_s16
    [0xFFFF2B00, 0x00A12409, 0x381C0E07, 0x0381C0E0] 3201514 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
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
    [0x00023100, 0x01214009, 0x00000000, 0x00000000] 3021900 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Index16, Rgb888x>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022B00, 0x00E0EC07, 0x80000000, 0x00000000] 2923650 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022B00, 0x00A0EC09, 0x80000000, 0x00000000] 2872040 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_1_i16_s16_t4_mtx0_1_i16_s16
    [0x03FE2B00, 0x00A12409, 0x381C0E07, 0x00000000] 2867966 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E0EC09, 0x80000000, 0x00000000] 2864876 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2F00, 0x00E0EC09, 0x00000007, 0x00000000] 2660400 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16_t4_mtx0_1_i8_s16_t5_mtx0_1_i8_s16
    [0x0AAA2A00, 0x00E12C09, 0x381C0E07, 0x000000E0] 2482440 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022F00, 0x00A0EC07, 0x80000000, 0x00000000] 2314660 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E12409, 0x00000000, 0x00000000] 2182934 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16
    [0x00AA2A00, 0x00E12C09, 0x001C0E07, 0x00000000] 1854748 {
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

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i16_s16
    [0x00EB2F00, 0x00E12C09, 0x001C0E07, 0x00000000] 1730622 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A0EC09, 0x00000000, 0x00000000] 1665394 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s8_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt
    [0x00050200, 0x01200003, 0x00000009, 0x00000000] 1637568 {
        bounds_prepare;
        position<Index8, i8, 3>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022300, 0x00A12009, 0x00000000, 0x00000000] 1416212 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022E00, 0x00E12C09, 0x00000000, 0x00000000] 1384154 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_s16
    [0x000F2B00, 0x00A12C09, 0x00000007, 0x00000000] 1366398 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_s8_t0_mtx0_1_dir_flt
    [0x00010200, 0x01200003, 0x00000000, 0x00000000] 1302988 {
        bounds_prepare;
        position<Index8, i8, 3>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A2A00, 0x01214C09, 0x00000009, 0x00000000] 1280339 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E12C09, 0x00000007, 0x00000000] 1273684 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022F00, 0x00A0EC07, 0x00000000, 0x00000000] 1269496 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_u16
    [0x00032F00, 0x00A12C09, 0x00000000, 0x00000000] 1263456 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16
    [0x00AE2A00, 0x00A12C09, 0x001C0E07, 0x00000000] 1216842 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A0EC07, 0x00000000, 0x00000000] 1195070 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A0EC07, 0x80000000, 0x00000000] 946530 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16
    [0x00AA2E00, 0x00E12C09, 0x001C0E07, 0x00000000] 865230 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_s16
    [0x00AA2E00, 0x00A12C09, 0x001C0A07, 0x00000000] 860700 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022B00, 0x00A12409, 0x00000000, 0x00000000] 843588 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16
    [0x00032A00, 0x00E12C09, 0x00000000, 0x00000000] 824940 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022B00, 0x00E0EC07, 0x00000000, 0x00000000] 821940 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F2F00, 0x00E0EC07, 0x80000007, 0x00000000] 797008 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022200, 0x00A12009, 0x00000000, 0x00000000] 755854 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00A12C07, 0x00000007, 0x00000000] 692550 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00E12C09, 0x00000E07, 0x00000000] 646098 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A12C07, 0x00000000, 0x00000000] 638096 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i8_s16
    [0x002F2F00, 0x00E12C09, 0x00000E07, 0x00000000] 620912 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022200, 0x00E12009, 0x00000000, 0x00000000] 616320 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F2B00, 0x00E12C09, 0x00000007, 0x00000000] 541756 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00A12C09, 0x00000E07, 0x00000000] 534776 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022E00, 0x00A0EC07, 0x80000000, 0x00000000] 523020 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00E12C09, 0x00000E05, 0x00000000] 506942 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u8
    [0x00022A00, 0x0020EC07, 0x00000000, 0x00000000] 480912 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E12C07, 0x00000000, 0x00000000] 471884 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E0EC09, 0x80000007, 0x00000000] 465628 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16
    [0x00AA2A00, 0x00E12409, 0x001C0E07, 0x00000000] 459795 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00E12C07, 0x00000E07, 0x00000000] 440154 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A12C09, 0x00000005, 0x00000000] 436414 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E0E407, 0x00000000, 0x00000000] 422904 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16
    [0x00AA2A00, 0x00A12C09, 0x001C0E07, 0x00000000] 419424 {
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

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8
    [0x000A2A00, 0x0020EC09, 0x80000001, 0x00000000] 418768 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_1_i16_s16_t4_mtx0_1_i16_s16_t5_mtx0_1_i16_s16_t6_mtx0_1_i16_s16_t7_mtx0_1_i16_s16
    [0xFFFF2B00, 0x00A12C09, 0x381C0E07, 0x0381C0E0] 418396 {
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

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A12409, 0x00000000, 0x00000000] 401208 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_u16
    [0x002A2A00, 0x00E12C07, 0x00000A07, 0x00000000] 390906 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt_t2_mtx0_1_i8_flt_t3_mtx0_1_i8_flt
    [0x00AA2A00, 0x01214C09, 0x00241209, 0x00000000] 383775 {
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

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16
    [0x003E2B00, 0x00A12C09, 0x00000E07, 0x00000000] 381388 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16_t4_mtx0_1_i8_s16
    [0x02AA2A00, 0x00E12C09, 0x381C0E05, 0x00000000] 364940 {
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

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00212409, 0x00000000, 0x00000000] 336500 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_u8
    [0x00011100, 0x00216009, 0x00000000, 0x00000000] 316836 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, u8, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_6666_t0_mtx0_1_i8_u8
    [0x00022200, 0x00212009, 0x00000000, 0x00000000] 287156 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i16_s16
    [0x003A2B00, 0x00E12C09, 0x00000E07, 0x00000000] 282186 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00E12C09, 0x00000005, 0x00000000] 265198 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00E12C07, 0x00000005, 0x00000000] 264708 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_u16
    [0x00032F00, 0x00A0EC07, 0x00000000, 0x00000000] 255408 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt_t2_mtx0_1_i8_flt
    [0x002A2A00, 0x01214C09, 0x00001209, 0x00000000] 252492 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_1_i8_s16
    [0x00BE2A00, 0x00E12C09, 0x001C0E07, 0x00000000] 228216 {
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

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A0EC07, 0x00000005, 0x00000000] 223664 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E12C07, 0x00000007, 0x00000000] 196992 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A0E409, 0x00000005, 0x00000000] 191968 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_u16
    [0x00022200, 0x00A16009, 0x00000000, 0x00000000] 159980 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i16_u16
    [0x00032F00, 0x00A0EC07, 0x80000000, 0x00000000] 136500 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx1_1_i8_u16
    [0x000A2A02, 0x00A0EC07, 0x80000005, 0x00000000] 128874 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord_matrix<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16
    [0x00022A00, 0x00E0EC07, 0x00000000, 0x00000000] 128448 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_u16
    [0x00AA2A00, 0x00E12C09, 0x00140E07, 0x00000000] 109360 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2F00, 0x00A0EC07, 0x80000005, 0x00000000] 100408 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_s16
    [0x00AA2A00, 0x00E12C09, 0x001C0E05, 0x00000000] 95130 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16
    [0x00022E00, 0x00A12C09, 0x00000000, 0x00000000] 84744 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_2_dir_flt_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt
    [0x00050100, 0x01200008, 0x00000009, 0x00000000] 84376 {
        bounds_prepare;
        position<Direct, f32, 2>;
        bounds_update;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2F00, 0x00A0EC07, 0x00000005, 0x00000000] 82544 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00A12C09, 0x00000007, 0x00000000] 81726 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022200, 0x01216009, 0x00000000, 0x00000000] 79032 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E0EC07, 0x00000007, 0x00000000] 76474 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_u16
    [0x002A2A00, 0x00E12C09, 0x00000A07, 0x00000000] 67950 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_u16_t4_mtx0_1_i8_u16
    [0x02AA2A00, 0x00E12C09, 0x28140E07, 0x00000000] 60652 {
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

    p_mtx1_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A0E409, 0x80000005, 0x00000000] 52272 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_dir_u8
    [0x00010100, 0x00200009, 0x00000000, 0x00000000] 51956 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Direct, u8, 2>;
    }

    p_mtx0_2_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u8
    [0x00022200, 0x0020E002, 0x00000000, 0x00000000] 42484 {
        bounds_prepare;
        position<Index8, i8, 2>;
        bounds_update;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_s8
    [0x00022A00, 0x00612409, 0x00000000, 0x00000000] 38520 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i8, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_s16_c0_0_i8_8888_t0_mtx0_1_i8_flt
    [0x00022A00, 0x01214C09, 0x80000000, 0x00000000] 37304 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022A00, 0x00A0E407, 0x00000000, 0x00000000] 32040 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16_t3_mtx0_1_i8_u8_t4_mtx0_1_i8_s16
    [0x02AA2A00, 0x00E12C09, 0x38040E07, 0x00000000] 30840 {
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
    [0x00022A00, 0x00212C09, 0x00000000, 0x00000000] 26728 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E12409, 0x00000007, 0x00000000] 22616 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00E0EC09, 0x00000007, 0x00000000] 21204 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16
    [0x000A2A00, 0x00A0EC07, 0x00000007, 0x00000000] 19592 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16
    [0x00022200, 0x00E16009, 0x00000000, 0x00000000] 17010 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00212408, 0x00000000, 0x00000000] 16728 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16
    [0x00022200, 0x00A0E007, 0x00000000, 0x00000000] 11544 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s16_c0_1_i8_6666_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_u16
    [0x002A2A00, 0x00A12C09, 0x00000A07, 0x00000000] 11308 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u8
    [0x00022A00, 0x0020E407, 0x00000000, 0x00000000] 10104 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_i8_flt_c0_1_i8_6666_t0_mtx0_1_i8_u8
    [0x00022200, 0x00212008, 0x00000000, 0x00000000] 9060 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_c0_0_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt_t2_mtx0_1_i8_flt
    [0x002A2200, 0x01214009, 0x00001209, 0x00000000] 8512 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00E0EC07, 0x00000005, 0x00000000] 7502 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A2A00, 0x00A0EC07, 0x80000005, 0x00000000] 5544 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_c0_0_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A2200, 0x01214009, 0x00000009, 0x00000000] 2912 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgb888x>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00E12409, 0x00000E07, 0x00000000] 2056 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16
    [0x002A2A00, 0x00E0EC07, 0x00000E07, 0x00000000] 1664 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_4444_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8
    [0x000A2A00, 0x0020E407, 0x00000001, 0x00000000] 1116 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s8_c0_1_i8_6666_t0_mtx0_1_i8_u8
    [0x00022A00, 0x00212407, 0x00000000, 0x00000000] 424 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        color<Index8, Rgba6666>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_dir_s16_t0_mtx0_1_dir_s16
    [0x00010100, 0x00E00007, 0x00000000, 0x00000000] 336 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_i8_s16_c0_1_i8_4444_t0_mtx0_1_i8_u8
    [0x00022200, 0x0020E007, 0x00000000, 0x00000000] 180 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        color<Index8, Rgba4444>;
        tex_coord<Index8, u8, 2>;
    }
}
