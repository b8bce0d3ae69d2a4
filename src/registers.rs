//! Register map and raw word decoding for the gyroscope.

/// Register holding the angular displacement read by the SPI backend.
pub const REG_SPI_ANGULAR_DISPLACEMENT: u8 = 0xAA;
/// Register holding the orientation read by the I2C backend.
pub const REG_I2C_ORIENTATION: u8 = 0xFF;

/// Number of bytes making up one register value on the wire.
pub const REGISTER_WORD_BYTES: usize = 2;

/// Decodes a register word transferred MSB first as two's complement.
#[inline]
pub fn decode_word(raw: [u8; REGISTER_WORD_BYTES]) -> i32 {
    i32::from(i16::from_be_bytes(raw))
}
