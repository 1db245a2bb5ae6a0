use genesis_genie_converter::genie_code::{decode, decode_fields, encode, GenieCode, Patch};
use genesis_genie_converter::Annotation;
use proptest::prelude::*;

proptest! {
    #[test]
    fn encode_then_decode_is_identity(address in 0u32..0x0100_0000, value in any::<u16>()) {
        let encoded = encode(address, value);
        let patch = decode(&encoded.code.to_string(), encoded.annotation)
            .expect("encoder output must decode");
        prop_assert_eq!(patch, Patch { address, value });
    }

    #[test]
    fn decode_then_encode_is_identity(fields in prop::array::uniform8(0u8..32)) {
        let code = GenieCode::from_fields(fields);
        let patch = decode_fields(&code, None);
        prop_assert_eq!(encode(patch.address, patch.value).code, code);
    }

    #[test]
    fn one_input_bit_flips_one_field_bit(
        address in 0u32..0x0100_0000,
        value in any::<u16>(),
        bit in 0u32..40,
    ) {
        let (a2, v2) = if bit < 24 {
            (address ^ (1 << bit), value)
        } else {
            (address, value ^ (1 << (bit - 24)))
        };
        let before = encode(address, value).code.fields();
        let after = encode(a2, v2).code.fields();
        let flipped: u32 = before
            .iter()
            .zip(after.iter())
            .map(|(x, y)| (x ^ y).count_ones())
            .sum();
        prop_assert_eq!(flipped, 1);
    }

    #[test]
    fn aliases_decode_like_canonical(address in 0u32..0x0100_0000, value in any::<u16>()) {
        let canonical = encode(address, value).code.to_string();
        let aliased: String = canonical
            .chars()
            .map(|c| match c {
                '0' => 'O',
                '1' => 'I',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        prop_assert_eq!(decode(&aliased, None).unwrap(), decode(&canonical, None).unwrap());
    }

    #[test]
    fn byte_annotation_only_touches_low_byte(
        address in 0u32..0x0100_0000,
        value in any::<u16>(),
        n in any::<u8>(),
    ) {
        let code = encode(address, value).code.to_string();
        let patch = decode(&code, Some(Annotation::Byte(n))).unwrap();
        prop_assert_eq!(patch.address, address);
        prop_assert_eq!(patch.value, (value & 0xFF00) | n as u16);
    }
}

#[test]
fn known_vector() {
    assert_eq!(encode(0x009C76, 0x5478).code.to_string(), "SCRA-BJX0");
    assert_eq!(decode("SCRA-BJX0", None).unwrap(), Patch { address: 0x009C76, value: 0x5478 });
}

#[test]
fn annotation_priorities() {
    let shown = |value: u16| encode(0, value).annotation.map(|a| a.to_string());
    assert_eq!(shown(0x7005).as_deref(), Some("[5]"));
    assert_eq!(shown(0x0042).as_deref(), Some("[66]"));
    assert_eq!(shown(0x5200).as_deref(), Some("+1"));
    assert_eq!(shown(0x5E00).as_deref(), Some("+7"));
    assert_eq!(shown(0x5F00).as_deref(), Some("-7"));
    assert_eq!(shown(0x53C0), None);
}

#[test]
fn malformed_code_is_an_error() {
    assert!(decode("SCRA-BJX#", None).is_err());
    assert!(decode("#CRA-BJX0", None).is_err());
}
