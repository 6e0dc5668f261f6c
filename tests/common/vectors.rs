//! Fixed key agreement vectors: private scalars `da`, `db`, their public keys `pa`, `pb` (wire
//! encoding) and the shared secret `s`.

pub struct Vector {
    pub curve: &'static str,
    pub da: &'static str,
    pub pa: &'static str,
    pub db: &'static str,
    pub pb: &'static str,
    pub s: &'static str,
}

pub const VECTORS: [Vector; 3] = [
    Vector {
        curve: "P-256",
        da: "0098a7892ec6a18e0fc62916fb4b0b296b748a1a7b0bc6cd89c678041ae0f639",
        pa: "0497dd638f77c77080a38ebfbfa519bcc8f9bc19607c9c15de045b8205a5b71fd95022cc3d841cd3b04ad9f9874a0b9bf5c2c56ff85b60a74596aa69e42309592a",
        db: "0092663cf1ee897f6eb17676bbce1bef140da1d3c030349c6bf655c424ca8ad5",
        pb: "043f5e3458402360d83afe3af4f63f5a767630e78a0b587b439a918d685cf5486e727fcb947a0a50f1dab3f281c6f5b14df616a0733489c47345f80ea51f842abb",
        s: "054d81ed6915b341f773ac331551e2ebdad48659b4e2c666655d4da747bd8069",
    },
    Vector {
        curve: "P-384",
        da: "00ab4ea999a39be19d0931d7e235e353a7086520d253a0d8bb44ff675788fb46285a9cb1a5039acdb8c71b80b5a88062",
        pa: "04d4a613306b624d305be4c99fca85d6d333a687f83483eff2c5756e6cdca73acebf18b97090511cbe62273c86afe2e6b8a1b115d4078bd441f2f95bf225c445324fd42fef1d6453efce83c5588e35e4ff4ac06b8719947ef7d544311ffaeb2820",
        db: "00998cc8d6ee848fc4536d09096246f1f48ae347802d7a79398c61fa0f40498e0bcee8ec85d1413cfdcac40959af0fd6",
        pb: "0446146c6abcd670e883541922cd032f637b39e47fd7e0823deb4637a34c64ac0cc24448a2e683b4fef031827397cdcf5dc5c31817a64624319d230ec65285ba72733eed5e5e1694e49c441c2821312df8781d529d0c31b5dded163a270e7cb91b",
        s: "b3c14410e17e60009308f622c86965bbac00af71105ad5c6813f63e6cbc7663be3babd8a5213db9f33aa12fcd4a8e2a1",
    },
    Vector {
        curve: "P-521",
        da: "0053687daf7af46db6838855d9833968152cb79f23f94acb678bfa30ea6a716ae62eab65e33e51d98d562983fce1cd01ac800140da9c14b59dbeeb14d8718a9e8e54",
        pa: "040000d48ffdaf7a8017340f7877b61f096c0f1065a78b7ef0c08afe0f7c233f87e5498e4b99cb09d7b230cf630726d6a39b3faa347b3237db1b9af2d01bc6fcf375a800ed4d7e9d80b1e1add62cd27a0f00f3771907cd6696519520dbb78c602337065875cdfdf7d6208dac90ac00053255f55200536c74d3cafee3b0152a760fdea56d9c",
        db: "0055464073cbf0e4f7d3ca80537594771e004c0db5f65048c477ca7eabed22b6ae115531f155000d6113f444a399126658c86b8b84503213c473393941762d2fa156",
        pb: "040034020598fcefdcea22bd5d5aca2baeef9b5cf72a2fd9698107b63f57f70409a96600bd90088d6c01a68527024b5c978b6a151a27deb565d04434432a6c0427b9bb00a89d33ba08e4ad17a3a6e743deda3e77b8b39332c812868920c160c268ce9dca963e9c0b0dfef5e1af947547be3e7bef728ac84fa5aa606cf99c15633ae507fdab",
        s: "01c6112e13b7eb2f0094487720ad8ebee5a5b6bd686d779c328355568788857dfa3818b36819ccbd4d578c54328d46b69fc5052800c4141b313c142ea910ebd6bd6d",
    },
];

pub fn hex(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
        .collect()
}
