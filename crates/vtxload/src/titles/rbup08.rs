// Generated by vtxgen from a descriptor profile of RBUP08.

crate::specialize::specialize! {
    "RBUP08";

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_u16
    [0x00030F00, 0x00A00C07, 0x80000000, 0x00000000] 94979596 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00C07, 0x80000000, 0x00000000] 64559916 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AA0A00, 0x00A01009, 0x00140A05, 0x00000000] 46127637 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16
    [0x000E0B00, 0x00A01009, 0x00000005, 0x00000000] 35671630 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u16
    [0x000F0F00, 0x00E01009, 0x00000005, 0x00000000] 20626536 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_u16_t1_mtx1_1_i16_u16_t2_mtx0_1_i16_u16
    [0x003F0F02, 0x00A00C07, 0x80000A05, 0x00000000] 20412465 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord_matrix<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_s16
    [0x00AA0A00, 0x00A01009, 0x001C0A05, 0x00000000] 17681599 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_s16
    [0x00AA0A00, 0x00A01009, 0x001C0205, 0x00000000] 15102100 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_u8
    [0x00AA0A00, 0x00A01009, 0x00040205, 0x00000000] 14338543 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_s16_t1_mtx1_1_i16_s16_t2_mtx0_1_i16_s16
    [0x003F0F02, 0x00E00C07, 0x80000E07, 0x00000000] 13454402 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord_matrix<Index16, i16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u16
    [0x000F0B00, 0x00E01009, 0x00000005, 0x00000000] 12865978 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_s16
    [0x002A0A00, 0x00A01009, 0x00000E05, 0x00000000] 12543279 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i16_u16
    [0x000E0B00, 0x00E01009, 0x00000005, 0x00000000] 12185127 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_u16_t3_mtx0_1_i16_s16
    [0x00FE0B00, 0x00A01009, 0x001C0A05, 0x00000000] 11482198 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i8_flt
    [0x00020F00, 0x01201009, 0x80000000, 0x00000000] 11019426 {
        pos_matrix;
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index8, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AA0A00, 0x00E01009, 0x00140A05, 0x00000000] 10867396 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_u8
    [0x00AE0A00, 0x00A01009, 0x00040205, 0x00000000] 10561332 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_u8_t1_mtx1_1_i16_u8_t2_mtx0_1_i16_u8
    [0x003F0F02, 0x00200C07, 0x80000201, 0x00000000] 9936810 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, u8, 2>;
        tex_coord_matrix<Index16, u8, 2>;
        tex_coord<Index16, u8, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16
    [0x00020B00, 0x00A01009, 0x00000000, 0x00000000] 9280523 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_s16
    [0x003F0B00, 0x00A01009, 0x00000E05, 0x00000000] 8675688 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_u16
    [0x00030F00, 0x00A01009, 0x00000000, 0x00000000] 8656956 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16
    [0x000A0A00, 0x00A01009, 0x00000005, 0x00000000] 7381220 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_u16_t3_mtx0_1_i16_s16
    [0x00FF0F00, 0x00A01009, 0x001C0A05, 0x00000000] 7141316 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16
    [0x000A0A00, 0x00E01009, 0x00000005, 0x00000000] 7014047 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_s16
    [0x002E0A00, 0x00A01009, 0x00000E05, 0x00000000] 6901614 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_u16
    [0x000F0F00, 0x00A01009, 0x00000005, 0x00000000] 6769270 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_u16_t3_mtx0_1_i16_u16
    [0x00FE0B00, 0x00E01009, 0x00140A05, 0x00000000] 5899848 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_flt
    [0x00030B00, 0x01201009, 0x00000000, 0x00000000] 5809236 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, f32, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_s16
    [0x003E0B00, 0x00A01009, 0x00000E05, 0x00000000] 5579970 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_s16
    [0x00AE0A00, 0x00A01009, 0x001C0A05, 0x00000000] 5316220 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i16_u16
    [0x000E0A00, 0x00E01009, 0x00000005, 0x00000000] 5115936 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i8_u16
    [0x00020F00, 0x00A01009, 0x00000000, 0x00000000] 4792368 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_u16_t3_mtx0_1_i8_s16
    [0x00BE0B00, 0x00A01009, 0x001C0A05, 0x00000000] 4604600 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AF0E00, 0x00A01009, 0x00140A05, 0x00000000] 4551810 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AF0A00, 0x00A01009, 0x00140A05, 0x00000000] 4534368 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i16_s16
    [0x00EF0B00, 0x00E01009, 0x001C0A05, 0x00000000] 4156698 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_u16_t1_mtx1_0_inv_u8
    [0x00030F02, 0x00A00C07, 0x80000000, 0x00000000] 3886668 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, u16, 2>;
        tex_matrix_only;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_s16
    [0x00AA0A00, 0x00E01009, 0x001C0A05, 0x00000000] 3503755 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_u16
    [0x00AA0A00, 0x00A01009, 0x00140205, 0x00000000] 3463680 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_s16
    [0x00AE0A00, 0x00A01009, 0x001C0205, 0x00000000] 3308032 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AE0B00, 0x00E01009, 0x00140A05, 0x00000000] 3211692 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200C07, 0x80000000, 0x00000000] 3166777 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_s16
    [0x00AF0B00, 0x00E01009, 0x001C0A05, 0x00000000] 2938572 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AA0A00, 0x00A01009, 0x00140A01, 0x00000000] 2923636 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_u16
    [0x00030E00, 0x00A00C07, 0x80000000, 0x00000000] 2891384 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_u8
    [0x00AA0A00, 0x00E01009, 0x00040205, 0x00000000] 2724130 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i8_s16
    [0x00020F00, 0x00E01009, 0x00000000, 0x00000000] 2676210 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16
    [0x002A0A00, 0x00A01009, 0x00000A05, 0x00000000] 2607642 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_s16
    [0x003F0F00, 0x00A01009, 0x00000E05, 0x00000000] 2514414 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_s16_t0_mtx0_1_i16_u16
    [0x00030F00, 0x00A00C09, 0x00000000, 0x00000000] 2351972 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_u16
    [0x003F0F00, 0x00A00C07, 0x00000A05, 0x00000000] 2097771 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E01007, 0x80000000, 0x00000000] 1967616 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_s16
    [0x003E0B00, 0x00201009, 0x00000E05, 0x00000000] 1842624 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_u8
    [0x003F0F00, 0x00A01009, 0x00000205, 0x00000000] 1820688 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u8, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16
    [0x00020B00, 0x00A01007, 0x00000000, 0x00000000] 1809504 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16
    [0x00020B00, 0x00E01009, 0x00000000, 0x00000000] 1669848 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A01007, 0x00000000, 0x00000000] 1553110 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i8_u16
    [0x00020F00, 0x00A00C07, 0x00000000, 0x00000000] 1481793 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_u16_t3_mtx0_1_i16_u16
    [0x00FF0F00, 0x00E01009, 0x00140A05, 0x00000000] 1464684 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u16
    [0x000A0A00, 0x00201009, 0x00000005, 0x00000000] 1353696 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_s16
    [0x00AA0A00, 0x00E01009, 0x001C0205, 0x00000000] 1329712 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_s16
    [0x00AF0A00, 0x00E01009, 0x001C0A05, 0x00000000] 1322776 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E00C07, 0x80000000, 0x00000000] 1267708 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_u16
    [0x003F0B00, 0x00A01009, 0x00000A05, 0x00000000] 1220190 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i16_u16
    [0x00030A00, 0x00A00C07, 0x80000000, 0x00000000] 1212106 {
        pos_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AE0A00, 0x00E01009, 0x00140A05, 0x00000000] 1188024 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AE0A00, 0x00A01009, 0x00140A05, 0x00000000] 1161664 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16
    [0x000E0A00, 0x00A01009, 0x00000005, 0x00000000] 1126080 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AB0A00, 0x00A01009, 0x00140A05, 0x00000000] 1125099 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i16_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i16_u8
    [0x003E0B00, 0x00A01009, 0x00000205, 0x00000000] 1118736 {
        bounds_prepare;
        position<Index16, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_u16_t1_mtx0_1_i8_u16
    [0x000B0A00, 0x00A01009, 0x00000005, 0x00000000] 1074759 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_s16
    [0x00AE0A00, 0x00E01009, 0x001C0A05, 0x00000000] 937664 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u8
    [0x00AA0A00, 0x00A01009, 0x00040A05, 0x00000000] 898776 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u8
    [0x002A0A00, 0x00A01009, 0x00000205, 0x00000000] 855504 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u8
    [0x002E0A00, 0x00A01009, 0x00000205, 0x00000000] 844536 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i8_u16
    [0x00020F00, 0x00A00C07, 0x80000000, 0x00000000] 810616 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_s16
    [0x002E0A00, 0x00201009, 0x00000E05, 0x00000000] 767760 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i16_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_s16
    [0x002F0A00, 0x00A01009, 0x00000E05, 0x00000000] 737598 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u16
    [0x002E0A00, 0x00A01009, 0x00000A05, 0x00000000] 715662 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AF0E00, 0x00E01009, 0x00140A05, 0x00000000] 714480 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i8_u8
    [0x00020F00, 0x00200C07, 0x80000000, 0x00000000] 702240 {
        pos_matrix;
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i16_u16_t2_mtx0_1_i8_s16
    [0x002E0A00, 0x00E01009, 0x00000E05, 0x00000000] 690984 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index16, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_flt_t0_mtx0_1_i16_s16_t1_mtx0_1_i16_u16
    [0x000F0E00, 0x00E01009, 0x00000005, 0x00000000] 661416 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, i16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_flt_t0_mtx0_1_i16_u8
    [0x00030F00, 0x00201007, 0x00000000, 0x00000000] 633876 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, u8, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_flt_t0_mtx0_1_i16_u16
    [0x00030F00, 0x00A01007, 0x00000000, 0x00000000] 603273 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_s16
    [0x002A0A00, 0x00A01009, 0x00000E01, 0x00000000] 578562 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16
    [0x002A0A00, 0x00201009, 0x00000A05, 0x00000000] 573078 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_s16
    [0x002A0A00, 0x00E01009, 0x00000E05, 0x00000000] 499044 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i16_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i16_u16
    [0x000E0E00, 0x00A01009, 0x00000005, 0x00000000] 428352 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index16, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx1_3_i8_u16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00C05, 0x80000000, 0x00000000] 426874 {
        pos_matrix;
        bounds_prepare;
        position<Index8, u16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u16
    [0x002A0A00, 0x00A01009, 0x00000A01, 0x00000000] 425010 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u8
    [0x000A0A00, 0x00A01009, 0x00000001, 0x00000000] 404032 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_s16
    [0x002A0A00, 0x00201009, 0x00000E05, 0x00000000] 389364 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00200C07, 0x00000000, 0x00000000] 371964 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_s16
    [0x00AA0A00, 0x00A01009, 0x001C0201, 0x00000000] 351548 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_u16_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A01005, 0x00000000, 0x00000000] 351360 {
        bounds_prepare;
        position<Index8, u16, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i16_s16_t0_mtx0_1_i8_s16
    [0x00020E00, 0x00E00C07, 0x00000000, 0x00000000] 339416 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00201009, 0x00000000, 0x00000000] 326634 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_s16
    [0x00AA0A00, 0x00201009, 0x001C0A05, 0x00000000] 322322 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_u16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16
    [0x00020A00, 0x00A00C05, 0x00000000, 0x00000000] 293860 {
        bounds_prepare;
        position<Index8, u16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16_t1_mtx1_1_i8_u16_t2_mtx0_1_i8_u16
    [0x002A0A02, 0x00A00C07, 0x80000A05, 0x00000000] 289810 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord_matrix<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_s16
    [0x002A0A00, 0x00201009, 0x00000E01, 0x00000000] 279684 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AA0A00, 0x00201009, 0x00140A05, 0x00000000] 275748 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_s16
    [0x00AA0A00, 0x00A01009, 0x001C0A01, 0x00000000] 261983 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_s16_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16
    [0x00020A00, 0x00E01007, 0x00000000, 0x00000000] 213616 {
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx1_3_i8_s16_nrm_0_0_i8_s16_t0_mtx0_1_i8_u16_t1_mtx1_0_inv_u8
    [0x00020A02, 0x00A00C07, 0x80000000, 0x00000000] 206724 {
        pos_matrix;
        tex_matrix;
        bounds_prepare;
        position<Index8, i16, 3>;
        bounds_update;
        normal<Index8, i16, 1>;
        tex_coord<Index8, u16, 2>;
        tex_matrix_only;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8
    [0x000A0A00, 0x00201009, 0x00000001, 0x00000000] 189736 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u8
    [0x000A0A00, 0x00E01009, 0x00000001, 0x00000000] 181224 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u8
    [0x002A0A00, 0x00A01009, 0x00000201, 0x00000000] 170004 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_u8
    [0x00AA0A00, 0x00A01009, 0x00040201, 0x00000000] 137836 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_s16
    [0x00AA0A00, 0x00201009, 0x001C0205, 0x00000000] 108836 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i16_s16_nrm_0_0_i16_s16_t0_mtx0_1_i16_u16
    [0x00030F00, 0x00A00C07, 0x00000000, 0x00000000] 90048 {
        bounds_prepare;
        position<Index16, i16, 3>;
        bounds_update;
        normal<Index16, i16, 1>;
        tex_coord<Index16, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_u8
    [0x00AA0A00, 0x00201009, 0x00040205, 0x00000000] 87906 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_2_dir_flt_c0_1_dir_8888_t0_mtx0_1_dir_flt_t1_mtx0_1_dir_flt_t2_mtx0_1_dir_flt
    [0x00151100, 0x01216008, 0x00001209, 0x00000000] 77936 {
        bounds_prepare;
        position<Direct, f32, 2>;
        bounds_update;
        color<Direct, Rgba8888>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
        tex_coord<Direct, f32, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_u16
    [0x00AA0A00, 0x00E01009, 0x00140205, 0x00000000] 59072 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u8
    [0x00AA0A00, 0x00E01009, 0x00040A05, 0x00000000] 52212 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_dir_u16_c0_1_dir_8888
    [0x00001100, 0x00016005, 0x00000000, 0x00000000] 48344 {
        bounds_prepare;
        position<Direct, u16, 3>;
        bounds_update;
        color<Direct, Rgba8888>;
    }

    p_mtx0_3_i8_u16_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8
    [0x00020A00, 0x00201005, 0x00000000, 0x00000000] 43920 {
        bounds_prepare;
        position<Index8, u16, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u8
    [0x00AA0A00, 0x00201009, 0x00040A05, 0x00000000] 29302 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_u16
    [0x00AA0A00, 0x00201009, 0x00140A01, 0x00000000] 19364 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u16
    [0x002A0A00, 0x00201009, 0x00000A01, 0x00000000] 16452 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_s16_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_u16
    [0x00AA0A00, 0x00E01009, 0x00140201, 0x00000000] 14768 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, i16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u16_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_u16
    [0x00AA0A00, 0x00201009, 0x00140205, 0x00000000] 12162 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u16_t3_mtx0_1_i8_s16
    [0x00AA0A00, 0x00201009, 0x001C0A01, 0x00000000] 8372 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, i16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u16_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_u16
    [0x00AA0A00, 0x00A01009, 0x00140201, 0x00000000] 8108 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u16, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u16, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_u8
    [0x00AA0A00, 0x00201009, 0x00040201, 0x00000000] 8108 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
    }

    p_mtx0_3_i8_flt_nrm_0_0_i8_flt_t0_mtx0_1_i8_u8_t1_mtx0_1_i8_u8_t2_mtx0_1_i8_u8_t3_mtx0_1_i8_s16
    [0x00AA0A00, 0x00201009, 0x001C0201, 0x00000000] 8108 {
        bounds_prepare;
        position<Index8, f32, 3>;
        bounds_update;
        normal<Index8, f32, 1>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, u8, 2>;
        tex_coord<Index8, i16, 2>;
    }
}
