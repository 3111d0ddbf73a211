//! Keycodes used by the keymap.
//!
//! The keyboard page follows the USB HID usage table. Mouse, audio and firmware
//! keys live in RMK's extended ranges, so a keymap written against this enum
//! can be handed to RMK-style firmware unchanged.

use strum::{FromRepr, IntoStaticStr};

/// KeyCode is the internal representation of all keycodes, keyboard operations, etc.
/// Use flat representation of keycodes.
#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, FromRepr, IntoStaticStr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCode {
    /// Reserved, no-key.
    No = 0x0000,
    A = 0x0004,
    B = 0x0005,
    C = 0x0006,
    D = 0x0007,
    E = 0x0008,
    F = 0x0009,
    G = 0x000A,
    H = 0x000B,
    I = 0x000C,
    J = 0x000D,
    K = 0x000E,
    L = 0x000F,
    M = 0x0010,
    N = 0x0011,
    O = 0x0012,
    P = 0x0013,
    Q = 0x0014,
    R = 0x0015,
    S = 0x0016,
    T = 0x0017,
    U = 0x0018,
    V = 0x0019,
    W = 0x001A,
    X = 0x001B,
    Y = 0x001C,
    Z = 0x001D,
    Kc1 = 0x001E,
    Kc2 = 0x001F,
    Kc3 = 0x0020,
    Kc4 = 0x0021,
    Kc5 = 0x0022,
    Kc6 = 0x0023,
    Kc7 = 0x0024,
    Kc8 = 0x0025,
    Kc9 = 0x0026,
    Kc0 = 0x0027,
    Enter = 0x0028,
    Escape = 0x0029,
    Backspace = 0x002A,
    Tab = 0x002B,
    Space = 0x002C,
    /// `-` and `_`
    Minus = 0x002D,
    /// `=` and `+`
    Equal = 0x002E,
    /// `[` and `{`
    LeftBracket = 0x002F,
    /// `]` and `}`
    RightBracket = 0x0030,
    /// `\` and `|`
    Backslash = 0x0031,
    /// `;` and `:`
    Semicolon = 0x0033,
    /// `'` and `"`
    Quote = 0x0034,
    /// `` ` `` and `~`
    Grave = 0x0035,
    Comma = 0x0036,
    Dot = 0x0037,
    Slash = 0x0038,
    CapsLock = 0x0039,
    F1 = 0x003A,
    F2 = 0x003B,
    F3 = 0x003C,
    F4 = 0x003D,
    F5 = 0x003E,
    F6 = 0x003F,
    F7 = 0x0040,
    F8 = 0x0041,
    F9 = 0x0042,
    F10 = 0x0043,
    F11 = 0x0044,
    F12 = 0x0045,
    PrintScreen = 0x0046,
    ScrollLock = 0x0047,
    Pause = 0x0048,
    Insert = 0x0049,
    Home = 0x004A,
    PageUp = 0x004B,
    Delete = 0x004C,
    End = 0x004D,
    PageDown = 0x004E,
    Right = 0x004F,
    Left = 0x0050,
    Down = 0x0051,
    Up = 0x0052,
    NumLock = 0x0053,
    KpSlash = 0x0054,
    KpAsterisk = 0x0055,
    KpMinus = 0x0056,
    KpPlus = 0x0057,
    KpEnter = 0x0058,
    Kp1 = 0x0059,
    Kp2 = 0x005A,
    Kp3 = 0x005B,
    Kp4 = 0x005C,
    Kp5 = 0x005D,
    Kp6 = 0x005E,
    Kp7 = 0x005F,
    Kp8 = 0x0060,
    Kp9 = 0x0061,
    Kp0 = 0x0062,
    KpDot = 0x0063,
    Application = 0x0065,
    SystemPower = 0x00A5,
    SystemSleep = 0x00A6,
    SystemWake = 0x00A7,
    AudioMute = 0x00A8,
    AudioVolUp = 0x00A9,
    AudioVolDown = 0x00AA,
    MediaNextTrack = 0x00AB,
    MediaPrevTrack = 0x00AC,
    MediaStop = 0x00AD,
    MediaPlayPause = 0x00AE,
    WwwBack = 0x00B6,
    WwwForward = 0x00B7,
    MouseUp = 0x00CD,
    MouseDown = 0x00CE,
    MouseLeft = 0x00CF,
    MouseRight = 0x00D0,
    MouseBtn1 = 0x00D1,
    MouseBtn2 = 0x00D2,
    MouseBtn3 = 0x00D3,
    MouseWheelUp = 0x00D9,
    MouseWheelDown = 0x00DA,
    MouseWheelLeft = 0x00DB,
    MouseWheelRight = 0x00DC,
    MouseAccel0 = 0x00DD,
    MouseAccel1 = 0x00DE,
    MouseAccel2 = 0x00DF,
    LCtrl = 0x00E0,
    LShift = 0x00E1,
    LAlt = 0x00E2,
    LGui = 0x00E3,
    RCtrl = 0x00E4,
    RShift = 0x00E5,
    RAlt = 0x00E6,
    RGui = 0x00E7,
    // Audio keycodes, use 0x460 ~ 0x47F
    AudioOn = 0x460,
    AudioOff = 0x461,
    AudioToggle = 0x462,
    // Internal functional keycodes, use 0x700 ~ 0x7FF
    /// Jump to the bootloader, QMK's `RESET`
    Bootloader = 0x700,
    Reboot = 0x701,
}

impl KeyCode {
    /// Returns `true` if the keycode is basic keycode
    pub const fn is_basic(self) -> bool {
        (self as u16) <= KeyCode::RGui as u16
    }

    /// Returns `true` if the keycode is a modifier keycode
    pub const fn is_modifier(self) -> bool {
        KeyCode::LCtrl as u16 <= self as u16 && self as u16 <= KeyCode::RGui as u16
    }

    /// Returns the byte with the bit corresponding to the USB HID
    /// modifier bitfield set.
    pub const fn as_modifier_bit(self) -> u8 {
        if self.is_modifier() {
            1 << (self as u16 - KeyCode::LCtrl as u16)
        } else {
            0
        }
    }

    /// Returns `true` if the keycode is a system keycode
    pub const fn is_system(self) -> bool {
        KeyCode::SystemPower as u16 <= self as u16 && self as u16 <= KeyCode::SystemWake as u16
    }

    /// Returns `true` if the keycode is a keycode in consumer page
    pub const fn is_consumer(self) -> bool {
        KeyCode::AudioMute as u16 <= self as u16 && self as u16 <= KeyCode::WwwForward as u16
    }

    /// Returns `true` if the keycode is a mouse keycode
    pub const fn is_mouse_key(self) -> bool {
        KeyCode::MouseUp as u16 <= self as u16 && self as u16 <= KeyCode::MouseAccel2 as u16
    }

    /// Returns `true` if the keycode is a audio keycode
    /// Note: Basic audio keycodes are not included
    pub const fn is_audio(self) -> bool {
        KeyCode::AudioOn as u16 <= self as u16 && self as u16 <= KeyCode::AudioToggle as u16
    }

    /// Returns `true` if the keycode is handled by the firmware itself, such as reboot keyboard, goto bootloader, etc.
    pub const fn is_firmware(self) -> bool {
        KeyCode::Bootloader as u16 <= self as u16 && self as u16 <= KeyCode::Reboot as u16
    }

    /// Short printable legend. Keys without a dedicated legend fall back to the variant name.
    pub fn legend(self) -> &'static str {
        match self {
            KeyCode::No => "",
            KeyCode::Kc1 => "1",
            KeyCode::Kc2 => "2",
            KeyCode::Kc3 => "3",
            KeyCode::Kc4 => "4",
            KeyCode::Kc5 => "5",
            KeyCode::Kc6 => "6",
            KeyCode::Kc7 => "7",
            KeyCode::Kc8 => "8",
            KeyCode::Kc9 => "9",
            KeyCode::Kc0 => "0",
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Esc",
            KeyCode::Backspace => "BackSp",
            KeyCode::Space => "Space",
            KeyCode::Minus => "-",
            KeyCode::Equal => "=",
            KeyCode::LeftBracket => "[",
            KeyCode::RightBracket => "]",
            KeyCode::Backslash => "\\",
            KeyCode::Semicolon => ";",
            KeyCode::Quote => "'",
            KeyCode::Grave => "`",
            KeyCode::Comma => ",",
            KeyCode::Dot => ".",
            KeyCode::Slash => "/",
            KeyCode::CapsLock => "CAPS",
            KeyCode::PrintScreen => "PrtSc",
            KeyCode::ScrollLock => "ScrLk",
            KeyCode::Delete => "Del",
            KeyCode::PageUp => "PgUp",
            KeyCode::PageDown => "PgDn",
            KeyCode::NumLock => "NmLock",
            KeyCode::KpSlash => "/",
            KeyCode::KpAsterisk => "*",
            KeyCode::KpMinus => "-",
            KeyCode::KpPlus => "+",
            KeyCode::KpEnter => "Enter",
            KeyCode::Kp1 => "1",
            KeyCode::Kp2 => "2",
            KeyCode::Kp3 => "3",
            KeyCode::Kp4 => "4",
            KeyCode::Kp5 => "5",
            KeyCode::Kp6 => "6",
            KeyCode::Kp7 => "7",
            KeyCode::Kp8 => "8",
            KeyCode::Kp9 => "9",
            KeyCode::Kp0 => "0",
            KeyCode::KpDot => ".",
            KeyCode::SystemSleep => "Sleep",
            KeyCode::AudioMute => "Mute",
            KeyCode::AudioVolUp => "Vol+",
            KeyCode::AudioVolDown => "Vol-",
            KeyCode::MediaNextTrack => "Next",
            KeyCode::MediaPrevTrack => "Prev",
            KeyCode::MediaPlayPause => "Play",
            KeyCode::WwwBack => "PgBck",
            KeyCode::WwwForward => "PgFwd",
            KeyCode::MouseUp => "MUp",
            KeyCode::MouseDown => "MDown",
            KeyCode::MouseLeft => "MLeft",
            KeyCode::MouseRight => "MRight",
            KeyCode::MouseBtn1 => "LClick",
            KeyCode::MouseBtn2 => "RClick",
            KeyCode::MouseWheelUp => "WhlUp",
            KeyCode::MouseWheelDown => "WhlDn",
            KeyCode::MouseAccel1 => "MAccl1",
            KeyCode::LCtrl | KeyCode::RCtrl => "Ctrl",
            KeyCode::LShift | KeyCode::RShift => "Shift",
            KeyCode::LAlt | KeyCode::RAlt => "Alt",
            KeyCode::LGui | KeyCode::RGui => "Gui",
            KeyCode::AudioOn => "Aud on",
            KeyCode::AudioOff => "Audoff",
            KeyCode::Bootloader => "Reset",
            other => other.into(),
        }
    }

    /// Legend of the keycode with shift held, for keys whose shifted symbol differs.
    pub fn shifted_legend(self) -> Option<&'static str> {
        let legend = match self {
            KeyCode::Kc1 => "!",
            KeyCode::Kc2 => "@",
            KeyCode::Kc3 => "#",
            KeyCode::Kc4 => "$",
            KeyCode::Kc5 => "%",
            KeyCode::Kc6 => "^",
            KeyCode::Kc7 => "&",
            KeyCode::Kc8 => "*",
            KeyCode::Kc9 => "(",
            KeyCode::Kc0 => ")",
            KeyCode::Minus => "_",
            KeyCode::Equal => "+",
            KeyCode::LeftBracket => "{",
            KeyCode::RightBracket => "}",
            KeyCode::Backslash => "|",
            KeyCode::Semicolon => ":",
            KeyCode::Quote => "\"",
            KeyCode::Grave => "~",
            KeyCode::Comma => "<",
            KeyCode::Dot => ">",
            KeyCode::Slash => "?",
            _ => return None,
        };
        Some(legend)
    }
}
