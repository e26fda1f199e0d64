// Generated by vtxgen from a descriptor profile of R5WEA4.

crate::specialize::specialize! {
    "R5WEA4";

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_flt
    [0x00030F00, 0x01201009, 0x00000000, 0x00000000] 336009589 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F2F00, 0x01217009, 0x00000009, 0x00000000] 186266262 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i8_flt
    [0x000B2F00, 0x01217009, 0x00000009, 0x00000000] 46889064 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F2B00, 0x01217009, 0x00000009, 0x00000000] 45604460 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i8_flt
    [0x00020F00, 0x01201009, 0x00000000, 0x00000000] 34087048 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_dir_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022100, 0x01216009, 0x00000000, 0x00000000] 15200553 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_flt
    [0x00020A00, 0x01201009, 0x00000000, 0x00000000] 11327911 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022A00, 0x01217009, 0x00000000, 0x00000000] 10913620 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i8_flt
    [0x000B2B00, 0x01217009, 0x00000009, 0x00000000] 9185355 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx1_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_flt
    [0x00020A00, 0x01201009, 0x80000000, 0x00000000] 8397070 {
        pos_matrix;
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A2B00, 0x01217009, 0x00000009, 0x00000000] 4740808 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A2A00, 0x01217009, 0x00000009, 0x00000000] 4667149 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i8_flt
    [0x000B3F00, 0x01217009, 0x00000009, 0x00000000] 4395615 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_c0_1_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i8_flt
    [0x000B3B00, 0x01217009, 0x00000009, 0x00000000] 4112316 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A2F00, 0x01217009, 0x00000009, 0x00000000] 3815183 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i16_flt
    [0x000E2B00, 0x01217009, 0x00000009, 0x00000000] 2978435 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_c0_1_i16_8888_t0_mtx0_1_i8_flt_t1_mtx0_1_i8_flt
    [0x000A3B00, 0x01217009, 0x00000009, 0x00000000] 2665104 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index8, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_2_dir_s16_c0_1_dir_8888_t0_mtx0_1_dir_s16
    [0x00011100, 0x00E16006, 0x00000000, 0x00000000] 2064922 {
        bounds_prepare;
        position<Direct, i16, 2>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_flt
    [0x00030A00, 0x01201009, 0x00000000, 0x00000000] 1925936 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F2A00, 0x01217009, 0x00000009, 0x00000000] 1796652 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt
    [0x00032A00, 0x01217009, 0x00000000, 0x00000000] 1667876 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_c0_1_i8_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i8_flt
    [0x000B2A00, 0x01217009, 0x00000009, 0x00000000] 1620445 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_1_i8_8888_t0_mtx0_1_i8_flt
    [0x00022F00, 0x01217009, 0x00000000, 0x00000000] 1088217 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index8, Rgba8888>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_flt
    [0x00030E00, 0x01201009, 0x00000000, 0x00000000] 1026132 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_flt
    [0x00033F00, 0x01217009, 0x00000000, 0x00000000] 837102 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_2_dir_s16_t0_mtx0_1_dir_s16
    [0x00010100, 0x00E00006, 0x00000000, 0x00000000] 631672 {
        bounds_prepare;
        position<Direct, i16, 2>;
        bounds_update;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt
    [0x00000A00, 0x00001009, 0x00000000, 0x00000000] 361765 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
    }

    p_mtx0_3_dir_flt_nrm_0_0_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt
    [0x00051500, 0x01217009, 0x00000009, 0x00000000] 65541 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, f32, 1>;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_2_dir_s16_c0_1_dir_8888_t0_mtx0_1_dir_s16_t1_mtx0_1_dir_s16
    [0x00051100, 0x00E16006, 0x00000007, 0x00000000] 40804 {
        bounds_prepare;
        position<Direct, i16, 2>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, i16, 2>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_dir_flt_t0_mtx0_1_dir_u16
    [0x00010100, 0x00A00009, 0x00000000, 0x00000000] 4788 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        tex_coord<Direct, u16, 2>;
    }

    p_mtx0_2_dir_s16_t0_mtx0_1_dir_s16_t1_mtx0_1_dir_s16_t2_mtx0_1_dir_s16_t3_mtx0_1_dir_s16_t4_mtx0_1_dir_s16_t5_mtx0_1_dir_s16
    [0x05550100, 0x00E00006, 0x381C0E07, 0x000000E0] 1196 {
        bounds_prepare;
        position<Direct, i16, 2>;
        bounds_update;
        tex_coord<Direct, i16, 2>;
        tex_coord<Direct, i16, 2>;
        tex_coord<Direct, i16, 2>;
        tex_coord<Direct, i16, 2>;
        tex_coord<Direct, i16, 2>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_dir_flt_nrm_0_0_dir_flt_t0_mtx0_1_dir_flt
    [0x00010500, 0x01201009, 0x00000000, 0x00000000] 70 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        normal<Direct, f32, 1>;
        tex_coord<Direct, f32, 2>;
    }
}
