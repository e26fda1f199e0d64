// Generated by vtxgen from a descriptor profile of WILETL.

crate::specialize::specialize! {
    "WILETL";

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F3F00, 0x00E17009, 0x00000007, 0x00000000] 851113002 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_s16
    [0x000F0F00, 0x01201009, 0x00000007, 0x00000000] 426176430 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_s16
    [0x000F3F00, 0x01217009, 0x00000007, 0x00000000] 63028530 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_1_1_i16_s16_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16_t2_mtx0_1_i16_s16_t3_mtx0_0_i16_u8
    [0x00FF0F00, 0x80E00E09, 0x00000E07, 0x00000000] 36996642 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal_index3<Index16, i16>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u8, 1>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F3F00, 0x01217009, 0x00000009, 0x00000000] 9756 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }
}
