// Generated by vtxgen from a descriptor profile of GBVE41.

crate::specialize::specialize! {
    "GBVE41";

    p_mtx0_3_i16_flt_c0_1_dir_8888_t0_mtx0_1_i16_flt
    [0x00031300, 0x01216009, 0x00000000, 0x00000000] 32720785 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt
    [0x00011300, 0x01216009, 0x00000000, 0x00000000] 8575716 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i16_8888_t0_mtx0_1_i8_flt
    [0x00023300, 0x01216009, 0x00000000, 0x00000000] 128032 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_u8_t0_mtx0_1_i16_flt
    [0x00030F00, 0x01200009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, u8, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_u8_c0_1_i16_8888_t0_mtx0_1_i16_flt
    [0x00033F00, 0x01216009, 0x00000000, 0x00000000] 0 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, u8, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }
}
