// Generated by vtxgen from a descriptor profile of SDWP18.

crate::specialize::specialize! {
    "SDWP18";

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_c0_0_i8_565_t0_mtx0_1_i16_flt
    [0x00032F00, 0x01201009, 0x80000000, 0x00000000] 37902932 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_flt
    [0x00000A00, 0x00001009, 0x80000000, 0x00000000] 6782698 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_0_i8_565_t0_mtx0_1_i8_flt
    [0x00022A00, 0x01201009, 0x00000000, 0x00000000] 1637648 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgb565>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i8_flt
    [0x00000B00, 0x00001009, 0x80000000, 0x00000000] 1612930 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
    }

    p_mtx0_2_i8_flt_nrm_0_0_i8_flt
    [0x00000A00, 0x00001008, 0x00000000, 0x00000000] 1405872 {
        bounds_prepare;
        position<Index8, f32, 2>;
        bounds_update;
        normal<Index8, f32, 1>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_0_i8_565
    [0x00002A00, 0x00001009, 0x00000000, 0x00000000] 186184 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgb565>;
    }
}
