//! Opcode Constants.
//!
//! One named byte per defined instruction. The constant name is the mnemonic:
//! `OP_DST_SRC` for register operands, `_IMM` for an inline byte, `_MEM` for an
//! inline 16-bit little-endian address. The encoding is regular (see
//! [`crate::isa::decode`]), but the literal values are spelled out here so
//! programs and tests can be written against them.

macro_rules! opcodes {
    ($($name:ident = $value:literal;)*) => {
        $(
            #[doc = concat!("`", stringify!($name), "` opcode.")]
            pub const $name: u8 = $value;
        )*

        /// Every defined opcode paired with its mnemonic, in ascending order.
        pub const ALL: &[(u8, &str)] = &[$(($name, stringify!($name))),*];
    };
}

opcodes! {
    NOP = 0x00;
    BRK = 0x01;

    ADC_A_B = 0x10; ADC_A_C = 0x11; ADC_A_D = 0x12;
    ADC_B_A = 0x13; ADC_B_C = 0x14; ADC_B_D = 0x15;
    ADC_C_A = 0x16; ADC_C_B = 0x17; ADC_C_D = 0x18;
    ADC_D_A = 0x19; ADC_D_B = 0x1A; ADC_D_C = 0x1B;
    ADC_A_IMM = 0x1C; ADC_B_IMM = 0x1D; ADC_C_IMM = 0x1E; ADC_D_IMM = 0x1F;

    SBB_A_B = 0x20; SBB_A_C = 0x21; SBB_A_D = 0x22;
    SBB_B_A = 0x23; SBB_B_C = 0x24; SBB_B_D = 0x25;
    SBB_C_A = 0x26; SBB_C_B = 0x27; SBB_C_D = 0x28;
    SBB_D_A = 0x29; SBB_D_B = 0x2A; SBB_D_C = 0x2B;
    SBB_A_IMM = 0x2C; SBB_B_IMM = 0x2D; SBB_C_IMM = 0x2E; SBB_D_IMM = 0x2F;

    AND_A_B = 0x30; AND_A_C = 0x31; AND_A_D = 0x32;
    AND_B_A = 0x33; AND_B_C = 0x34; AND_B_D = 0x35;
    AND_C_A = 0x36; AND_C_B = 0x37; AND_C_D = 0x38;
    AND_D_A = 0x39; AND_D_B = 0x3A; AND_D_C = 0x3B;
    AND_A_IMM = 0x3C; AND_B_IMM = 0x3D; AND_C_IMM = 0x3E; AND_D_IMM = 0x3F;

    LOR_A_B = 0x40; LOR_A_C = 0x41; LOR_A_D = 0x42;
    LOR_B_A = 0x43; LOR_B_C = 0x44; LOR_B_D = 0x45;
    LOR_C_A = 0x46; LOR_C_B = 0x47; LOR_C_D = 0x48;
    LOR_D_A = 0x49; LOR_D_B = 0x4A; LOR_D_C = 0x4B;
    LOR_A_IMM = 0x4C; LOR_B_IMM = 0x4D; LOR_C_IMM = 0x4E; LOR_D_IMM = 0x4F;

    ADC_A_MEM = 0x50; ADC_B_MEM = 0x51; ADC_C_MEM = 0x52; ADC_D_MEM = 0x53;
    SBB_A_MEM = 0x54; SBB_B_MEM = 0x55; SBB_C_MEM = 0x56; SBB_D_MEM = 0x57;
    AND_A_MEM = 0x58; AND_B_MEM = 0x59; AND_C_MEM = 0x5A; AND_D_MEM = 0x5B;
    LOR_A_MEM = 0x5C; LOR_B_MEM = 0x5D; LOR_C_MEM = 0x5E; LOR_D_MEM = 0x5F;

    NOT_A = 0x60; NOT_B = 0x61; NOT_C = 0x62; NOT_D = 0x63;
    ROL_A_IMM = 0x64; ROL_B_IMM = 0x65; ROL_C_IMM = 0x66; ROL_D_IMM = 0x67;
    ROR_A_IMM = 0x68; ROR_B_IMM = 0x69; ROR_C_IMM = 0x6A; ROR_D_IMM = 0x6B;

    LDB_A_IMM = 0x70; LDB_B_IMM = 0x71; LDB_C_IMM = 0x72; LDB_D_IMM = 0x73;
    LDB_A_MEM = 0x74; LDB_B_MEM = 0x75; LDB_C_MEM = 0x76; LDB_D_MEM = 0x77;
    STB_MEM_A = 0x78; STB_MEM_B = 0x79; STB_MEM_C = 0x7A; STB_MEM_D = 0x7B;
    STB_MEM_IMM = 0x7C;

    MVB_A_B = 0x80; MVB_A_C = 0x81; MVB_A_D = 0x82;
    MVB_B_A = 0x83; MVB_B_C = 0x84; MVB_B_D = 0x85;
    MVB_C_A = 0x86; MVB_C_B = 0x87; MVB_C_D = 0x88;
    MVB_D_A = 0x89; MVB_D_B = 0x8A; MVB_D_C = 0x8B;
    MVB_A_F = 0x8C; MVB_B_F = 0x8D; MVB_C_F = 0x8E; MVB_D_F = 0x8F;
    MVB_F_A = 0x90; MVB_F_B = 0x91; MVB_F_C = 0x92; MVB_F_D = 0x93;

    JEZ_MEM = 0xA0;
    JGZ_MEM = 0xA1;
    JCS_MEM = 0xA2;

    PUSH_A = 0xB0; PUSH_B = 0xB1; PUSH_C = 0xB2; PUSH_D = 0xB3;
    PUSH_F = 0xB4;
    PUSH_IP = 0xB5;
    PUSH_IMM = 0xB6;
    PUSH_MEM = 0xB7;

    POP_A = 0xC0; POP_B = 0xC1; POP_C = 0xC2; POP_D = 0xC3;
    POP_F = 0xC4;
    POP_IP = 0xC5;
    POP_DISCARD = 0xC6;

    DEREF_AB_A = 0xD0;
    DEREF_CD_C = 0xD1;
}
