/// Key code de Enter en eventos de teclado legacy
const ENTER_KEY_CODE: u32 = 13;

/// True si el evento de teclado (por `key` o `keyCode` legacy) es Enter
pub fn is_enter_key(key: &str, key_code: u32) -> bool {
    key == "Enter" || key_code == ENTER_KEY_CODE
}
