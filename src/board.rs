//! Pin map of the ESP32-S3 PoE 8DI/8RO board.
//!
//! GPIO numbers as wired on the board. Relays are not MCU pins; they sit
//! behind the TCA9554 expander on the I2C bus (expander pins 0-7).

// W5500 Ethernet over SPI
pub const W5500_CS: u8 = 16;
pub const W5500_INT: u8 = 12;
/// Not routed to a header on this board.
pub const W5500_RST: u8 = 39;
pub const SPI_SCLK: u8 = 15;
pub const SPI_MISO: u8 = 14;
pub const SPI_MOSI: u8 = 13;

// I2C: relay expander, RTC
pub const I2C_SDA: u8 = 42;
pub const I2C_SCL: u8 = 41;
/// TCA9554 address with A2..A0 tied low.
pub const TCA9554_ADDR: u8 = 0x20;
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Number of opto-isolated inputs.
pub const DI_COUNT: u8 = 8;

/// Input GPIOs, in input index order.
pub const DI_PINS: [u8; DI_COUNT as usize] = [4, 5, 6, 7, 8, 9, 10, 11];

/// Number of relays on the expander.
pub const RELAY_COUNT: u8 = 8;

pub const BOOT_BUTTON: u8 = 0;
pub const BUZZER: u8 = 46;
/// WS2812 status pixel data line.
pub const RGB_LED: u8 = 38;

// RS485/CAN transceiver (isolated)
pub const RS485_TX: u8 = 17;
pub const RS485_RX: u8 = 18;

// TF card
pub const SD_D0: u8 = 45;
pub const SD_CMD: u8 = 47;
pub const SD_CLK: u8 = 48;

/// Returns the GPIO for input `index`, or `None` past the last input.
#[inline]
pub fn input_pin(index: u8) -> Option<u8> {
    DI_PINS.get(index as usize).copied()
}
