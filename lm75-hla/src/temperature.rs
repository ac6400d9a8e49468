//! LM75 temperature encoding.
//!
//! Temperatures occupy the upper nine bits of a 16-bit word in sign-magnitude
//! form: bit 15 is the sign, bits 14-7 the magnitude in 0.5 °C steps, and
//! the low seven bits are unused.

const SIGN: u16 = 0x8000;
const MAGNITUDE_MASK: u16 = 0x7FFF;
const FRACTION_BITS: u32 = 7;

/// Largest magnitude the encoding can carry.
pub const MAX_CELSIUS: f64 = 127.5;

/// Convert a raw register word to degrees Celsius.
pub fn decode_celsius(raw: u16) -> f64 {
    let half_degrees = (raw & MAGNITUDE_MASK) >> FRACTION_BITS;
    let celsius = f64::from(half_degrees) / 2.0;
    if raw & SIGN != 0 {
        -celsius
    } else {
        celsius
    }
}

/// Convert degrees Celsius to a raw register word.
///
/// Rounds to the nearest 0.5 °C and saturates at [`MAX_CELSIUS`].
pub fn encode_celsius(celsius: f64) -> u16 {
    let half_degrees = (celsius.abs() * 2.0).round().min(MAX_CELSIUS * 2.0) as u16;
    let magnitude = half_degrees << FRACTION_BITS;
    if celsius.is_sign_negative() && half_degrees != 0 {
        magnitude | SIGN
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0x1900, 25.0 ; "twenty five")]
    #[test_case(0x9900, -25.0 ; "negative twenty five")]
    #[test_case(0x0080, 0.5 ; "half degree")]
    #[test_case(0x0000, 0.0 ; "zero")]
    #[test_case(0x7F80, 127.5 ; "maximum")]
    #[test_case(0x197F, 25.0 ; "reserved bits ignored")]
    #[test_case(0xFF80, -127.5 ; "minimum")]
    fn test_decode(raw: u16, expected: f64) {
        assert_eq!(decode_celsius(raw), expected);
    }

    #[test]
    fn test_sign_magnitude_not_twos_complement() {
        // 0xFF80 would be -0.5 °C in two's complement
        assert_eq!(decode_celsius(0xFF80), -127.5);
    }

    #[test_case(25.0, 0x1900)]
    #[test_case(-25.0, 0x9900)]
    #[test_case(25.2, 0x1900 ; "rounds down to half step")]
    #[test_case(25.3, 0x1980 ; "rounds up to half step")]
    #[test_case(300.0, 0x7F80 ; "saturates")]
    #[test_case(-0.0, 0x0000 ; "negative zero")]
    fn test_encode(celsius: f64, expected: u16) {
        assert_eq!(encode_celsius(celsius), expected);
    }

    #[test]
    fn test_round_trip_every_step() {
        for step in -255i32..=255 {
            let celsius = f64::from(step) / 2.0;
            assert_eq!(decode_celsius(encode_celsius(celsius)), celsius);
        }
    }
}
