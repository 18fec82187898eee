//! Known-answer tests for the built-in hash functions

use streamhash::{
    Algorithm, BytesFunnel, HashFunction, Hasher, HashingBuilder, Murmur3_128, PrimitiveSink,
    SequentialFunnel, SipHashFunction, StrFunnel, U64Funnel, UnencodedCharsFunnel,
};

#[test]
fn murmur3_128_vectors() {
    let counting: Vec<u8> = (0..64).collect();
    let unseeded = Murmur3_128::new(0);
    assert_eq!(
        unseeded.hash_bytes(&counting[..16]).to_string(),
        "303f9091b524494445e82f76566490ab"
    );
    assert_eq!(
        unseeded.hash_bytes(&counting).to_string(),
        "0123818d2d52d5ffa18e3356eb3822a2"
    );
    assert_eq!(
        Murmur3_128::new(42)
            .hash_str("The quick brown fox jumps over the lazy dog")
            .to_string(),
        "d7d50bfe93cf0d748f5c70ecf46c54c4"
    );
}

#[test]
fn siphash_reference_key() {
    let f = SipHashFunction::new(0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908);
    assert_eq!(f.hash_bytes(b"").to_string(), "310e0edd47db6f72");
    let message: Vec<u8> = (0..15).collect();
    assert_eq!(f.hash_bytes(&message).as_u64(), Ok(0xa129ca6149be45e5));
}

#[test]
fn one_shot_helpers_agree_with_sinks() {
    let f = Murmur3_128::new(3);

    let mut hasher = f.new_hasher();
    hasher.put_u64(0x1122_3344_5566_7788);
    assert_eq!(hasher.hash(), f.hash_u64(0x1122_3344_5566_7788));

    assert_eq!(f.hash_u32(7), f.hash_bytes(&[7, 0, 0, 0]));
    assert_eq!(
        f.hash_unencoded_chars("hi"),
        f.hash_bytes(&[0x68, 0, 0x69, 0])
    );
}

#[test]
fn funnels() {
    let f = Murmur3_128::new(0);
    assert_eq!(f.hash_object("abc", &StrFunnel), f.hash_str("abc"));
    assert_eq!(
        f.hash_object(&b"abc"[..], &BytesFunnel),
        f.hash_bytes(b"abc")
    );
    assert_eq!(
        f.hash_object("abc", &UnencodedCharsFunnel),
        f.hash_unencoded_chars("abc")
    );
    assert_eq!(
        f.hash_object(&[1_u64, 2, 3][..], &SequentialFunnel(U64Funnel)),
        f.hash_bytes(
            &[1_u64, 2, 3]
                .iter()
                .flat_map(|v| v.to_le_bytes())
                .collect::<Vec<u8>>()
        )
    );
}

#[test]
fn struct_funnel() {
    struct Contact {
        id: u64,
        name: String,
        active: bool,
    }

    let funnel = |c: &Contact, sink: &mut dyn PrimitiveSink| {
        sink.put_u64(c.id);
        sink.put_str(&c.name);
        sink.put_bool(c.active);
    };

    let f = SipHashFunction::from_seed(b"contacts");
    let a = Contact {
        id: 1,
        name: "Ada".to_owned(),
        active: true,
    };
    let b = Contact {
        id: 1,
        name: "Ada".to_owned(),
        active: false,
    };
    assert_eq!(f.hash_object(&a, &funnel), f.hash_object(&a, &funnel));
    assert_ne!(f.hash_object(&a, &funnel), f.hash_object(&b, &funnel));
}

#[test]
fn configured_functions() {
    let murmur = HashingBuilder::new()
        .algorithm(Algorithm::Murmur3_128)
        .seed(42)
        .build();
    assert_eq!(
        murmur
            .hash_str("The quick brown fox jumps over the lazy dog")
            .to_string(),
        "d7d50bfe93cf0d748f5c70ecf46c54c4"
    );

    let sha3 = HashingBuilder::new().algorithm(Algorithm::Sha3_256).build();
    assert_eq!(
        sha3.hash_bytes(b"").to_string(),
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
    );

    // The seed only matters to seeded algorithms
    let seeded = HashingBuilder::new()
        .algorithm(Algorithm::Sha3_256)
        .seed(5)
        .build();
    assert_eq!(seeded.hash_bytes(b"x"), sha3.hash_bytes(b"x"));

    let sip_a = HashingBuilder::new().algorithm(Algorithm::SipHash24).seed(1).build();
    let sip_b = HashingBuilder::new().algorithm(Algorithm::SipHash24).seed(2).build();
    assert_ne!(sip_a.hash_bytes(b"x"), sip_b.hash_bytes(b"x"));
}
