// Generated by vtxgen from a descriptor profile of SPDE52.

crate::specialize::specialize! {
    "SPDE52";

    p_mtx0_3_i16_flt_nrm_0_0_i16_s8_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E00409, 0x00000000, 0x00000000] 166080810 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F0300, 0x00E00009, 0x00000007, 0x00000000] 123416900 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A0200, 0x00E00009, 0x00000007, 0x00000000] 65759488 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt
    [0x00000300, 0x00000009, 0x00000000, 0x00000000] 42878062 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
    }

    p_mtx0_3_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F3300, 0x00E16009, 0x00000007, 0x00000000] 23514317 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2200, 0x00E16009, 0x00000007, 0x00000000] 12236002 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s8_c0_1_i16_8888_t0_mtx0_1_i16_s16
    [0x00033F00, 0x00E16409, 0x00000000, 0x00000000] 5036207 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16
    [0x003F3300, 0x00E16009, 0x00000E07, 0x00000000] 2678223 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_i8_s16
    [0x00020200, 0x00E00009, 0x00000000, 0x00000000] 2199774 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s8_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F0F00, 0x00E00409, 0x00000007, 0x00000000] 1798654 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i8, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A0A00, 0x00E00409, 0x00000007, 0x00000000] 1065364 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16
    [0x002A0200, 0x00E00009, 0x00000E07, 0x00000000] 676915 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_s8_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00409, 0x00000000, 0x00000000] 421736 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, i8, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_flt_t0_mtx0_1_i8_s16
    [0x00020200, 0x00E00009, 0x80000000, 0x00000000] 255296 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16
    [0x003F0300, 0x00E00009, 0x00000E07, 0x00000000] 119460 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16
    [0x000A2200, 0x00E16009, 0x80000007, 0x00000000] 108237 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_s16_t2_mtx0_1_i8_s16
    [0x002A2200, 0x00E16009, 0x00000E07, 0x00000000] 31445 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, i16, 2>;
    }
}
