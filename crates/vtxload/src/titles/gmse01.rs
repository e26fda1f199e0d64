// Generated by vtxgen from a descriptor profile of GMSE01.

crate::specialize::specialize! {
    "GMSE01";

    p_mtx0_3_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_flt
    [0x00033300, 0x01216009, 0x00000000, 0x00000000] 577623607 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt
    [0x00000300, 0x00000009, 0x00000000, 0x00000000] 154511880 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_flt
    [0x00033F00, 0x01216C07, 0x00000000, 0x00000000] 116112156 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_flt
    [0x00033300, 0x01216007, 0x00000000, 0x00000000] 71055456 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt_t2_mtx0_1_i16_flt
    [0x003F0F00, 0x01200C07, 0x00001209, 0x00000000] 49024855 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F3300, 0x01216009, 0x00000009, 0x00000000] 35805649 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_s16
    [0x00000300, 0x00000007, 0x00000000, 0x00000000] 34237744 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_flt
    [0x00033F00, 0x01216C09, 0x00000000, 0x00000000] 31459506 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt_t2_mtx0_1_i16_flt
    [0x003F0F00, 0x01200C07, 0x80001209, 0x00000000] 30277195 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F3300, 0x01216007, 0x00000009, 0x00000000] 20865728 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_s16
    [0x00033F00, 0x00E17009, 0x80000000, 0x00000000] 16973968 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt
    [0x00051100, 0x01216009, 0x00000009, 0x00000000] 11037728 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E01009, 0x80000000, 0x00000000] 10476336 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F3F00, 0x00E17009, 0x80000007, 0x00000000] 8871715 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_s16
    [0x00033F00, 0x00E17009, 0x00000000, 0x00000000] 4883794 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F3F00, 0x01216C09, 0x00000009, 0x00000000] 4393575 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_c0_1_i16_8888
    [0x00003F00, 0x00017009, 0x80000000, 0x00000000] 2639429 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index16, Rgba8888>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F0F00, 0x00E00C07, 0x80000007, 0x00000000] 2613328 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_flt
    [0x00030F00, 0x01200C07, 0x00000000, 0x00000000] 2110888 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_flt
    [0x00033F00, 0x01216C07, 0x80000000, 0x00000000] 1399102 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_dir_s16_c0_1_dir_8888_t0_mtx0_1_dir_flt
    [0x00011100, 0x01216007, 0x00000000, 0x00000000] 1000352 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F0F00, 0x00E00C07, 0x00000007, 0x00000000] 902888 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_flt
    [0x00030F00, 0x01200C09, 0x00000000, 0x00000000] 591570 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_s16
    [0x00030F00, 0x00E01009, 0x00000000, 0x00000000] 501900 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_t0_mtx0_1_i8_u8
    [0x00020300, 0x00200009, 0x00000000, 0x00000000] 362004 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_dir_s16_t0_mtx0_1_dir_u16_t1_mtx0_1_dir_s16
    [0x00050100, 0x00A00006, 0x00000007, 0x00000000] 329652 {
        bounds_prepare;
        position<Direct, i16, 2>;
        bounds_update;
        tex_coord<Direct, u16, 2>;
        tex_coord<Direct, i16, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_s16
    [0x000F3300, 0x00E16009, 0x00000007, 0x00000000] 326560 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_c0_1_i16_8888
    [0x00003F00, 0x00017009, 0x00000000, 0x00000000] 314766 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        color<Index16, Rgba8888>;
    }

    p_mtx0_3_dir_s16_c0_1_dir_8888_t0_mtx0_1_dir_u16
    [0x00011100, 0x00A16007, 0x00000000, 0x00000000] 270732 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_c0_1_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt_t2_mtx0_1_i16_flt
    [0x003F3F00, 0x01216C09, 0x00001209, 0x00000000] 184690 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt
    [0x000F0F00, 0x01200C07, 0x00000009, 0x00000000] 179086 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i16_8888_t0_mtx0_1_i16_flt_t1_mtx0_1_i16_flt_t2_mtx0_1_i16_flt
    [0x003F3300, 0x01216009, 0x00001209, 0x00000000] 177974 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index16, Rgba8888>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_2_dir_u16_t0_mtx0_1_dir_u16
    [0x00010100, 0x00A00004, 0x00000000, 0x00000000] 174372 {
        bounds_prepare;
        position<Direct, u16, 2>;
        bounds_update;
        tex_coord<Direct, u16, 2>;
    }

    p_mtx0_2_dir_flt_t0_mtx0_1_dir_s8
    [0x00010100, 0x00600008, 0x00000000, 0x00000000] 95320 {
        bounds_prepare;
        position<Direct, f32, 2>;
        bounds_update;
        tex_coord<Direct, i8, 2>;
    }

    p_mtx0_3_i16_flt_c0_1_i8_8888_t0_mtx0_1_i8_u8
    [0x00022300, 0x00216009, 0x00000000, 0x00000000] 29264 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        color<Index8, Rgba8888>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_flt
    [0x00030F00, 0x01201009, 0x80000000, 0x00000000] 7116 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_dir_flt_c0_0_dir_888
    [0x00001100, 0x00004009, 0x00000000, 0x00000000] 4692 {
        bounds_prepare;
        position<Direct, f32, 3>;
        bounds_update;
        color<Direct, Rgb888>;
    }

    p_mtx0_2_dir_s16_t0_mtx0_1_dir_u16
    [0x00010100, 0x00A00006, 0x00000000, 0x00000000] 800 {
        bounds_prepare;
        position<Direct, i16, 2>;
        bounds_update;
        tex_coord<Direct, u16, 2>;
    }

    p_mtx0_3_dir_s16_t0_mtx0_1_dir_u16
    [0x00010100, 0x00A00007, 0x00000000, 0x00000000] 464 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        tex_coord<Direct, u16, 2>;
    }

    p_mtx0_3_dir_s16_c0_1_dir_8888_t0_mtx0_1_dir_s8
    [0x00011100, 0x00616007, 0x00000000, 0x00000000] 404 {
        bounds_prepare;
        position<Direct, i16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, i8, 2>;
    }
}
