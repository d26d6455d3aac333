pub use smart_leds::hsv::hsv2rgb;

use smart_leds::RGB8;
use smart_leds::hsv::Hsv as HSV;

pub type Rgb = RGB8;
pub type Hsv = HSV;
