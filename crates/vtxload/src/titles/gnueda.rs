// Generated by vtxgen from a descriptor profile of GNUEDA.

crate::specialize::specialize! {
    "GNUEDA";

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_flt
    [0x00030F00, 0x01201009, 0x80000000, 0x00000000] 16423699 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F3300, 0x01216009, 0x00000009, 0x00000000] 3148318 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A0300, 0x01200009, 0x00000009, 0x00000000] 3032380 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i8_flt
    [0x00020300, 0x01200009, 0x00000000, 0x00000000] 1457768 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt
    [0x00000F00, 0x00001009, 0x80000000, 0x00000000] 1414283 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
    }

    p_mtx0_2_dir_s16_c0_1_dir_8888_t0_mtx0_1_dir_flt
    [0x00011100, 0x01216006, 0x00000000, 0x00000000] 254612 {
        bounds_prepare;
        position<Direct, i16, 2>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_2_dir_s8_c0_1_dir_8888_t0_mtx0_1_dir_u8
    [0x00011100, 0x00216002, 0x00000000, 0x00000000] 145692 {
        bounds_prepare;
        position<Direct, i8, 2>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, u8, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F0F00, 0x01201009, 0x80000009, 0x00000000] 59267 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i8_flt_c0_1_i8_8888
    [0x00002200, 0x00016009, 0x80000000, 0x00000000] 23726 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
    }

    p_mtx0_2_dir_u8
    [0x00000100, 0x00000000, 0x00000000, 0x00000000] 9896 {
        bounds_prepare;
        position<Direct, u8, 2>;
        bounds_update;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt
    [0x00000B00, 0x00001009, 0x00000000, 0x00000000] 9737 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_i8_u8
    [0x00021100, 0x00216009, 0x00000000, 0x00000000] 5576 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }
}
