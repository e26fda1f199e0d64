// Generated by vtxgen from a descriptor profile of GM8E01.

crate::specialize::specialize! {
    "GM8E01";

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_flt
    [0x000F0F00, 0x00A00C09, 0x00000009, 0x00000000] 24932407 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_dir_s16_c0_1_dir_4444
    [0x00001100, 0x0000E007, 0x00000000, 0x00000000] 11329846 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        color<Direct, Rgba4444>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt_t2_mtx0_1_i16_flt
    [0x003F0F00, 0x01201009, 0x00001209, 0x00000000] 10822718 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F0F00, 0x01201009, 0x00000009, 0x00000000] 7671147 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_flt
    [0x00030F00, 0x01200C09, 0x00000000, 0x00000000] 5082850 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_dir_flt_nrm_0_0_dir_s8_c0_1_dir_8888
    [0x00001500, 0x00016409, 0x00000000, 0x00000000] 972930 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, i8, 1>;
        color<Direct, Rgba8888>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F0F00, 0x01200C09, 0x00000009, 0x00000000] 742268 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_flt_t2_mtx0_1_i16_flt
    [0x003F0F00, 0x00A00C09, 0x00001209, 0x00000000] 730216 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_s8
    [0x00011100, 0x00616009, 0x00000000, 0x00000000] 558356 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, i8, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt
    [0x00000F00, 0x00001009, 0x00000000, 0x00000000] 258020 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt_t2_mtx0_1_i16_flt
    [0x003F0F00, 0x01200C09, 0x00001209, 0x00000000] 228150 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt_t2_mtx0_1_dir_flt
    [0x00151100, 0x01216009, 0x00001209, 0x00000000] 26400 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_dir_flt_nrm_0_0_dir_flt_c0_1_dir_8888
    [0x00001500, 0x00017009, 0x00000000, 0x00000000] 10372 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, f32, 1>;
        color<Direct, Rgba8888>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_dir_u16
    [0x00010100, 0x00A00009, 0x00000000, 0x00000000] 3972 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Direct, u16, 2>;
    }
}
