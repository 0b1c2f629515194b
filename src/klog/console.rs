//! Console - destino das linhas de log
//!
//! Substitui a UART do kernel: o host instala um [`ConsoleSink`] e todas as
//! macros de log escrevem nele. Valores numéricos são formatados à mão, sem
//! `core::fmt`, para manter o caminho de log sem alocação.

use spin::RwLock;

/// Destino das linhas de log
pub trait ConsoleSink: Sync {
    /// Escreve um fragmento de linha
    fn write_str(&self, s: &str);
}

static SINK: RwLock<Option<&'static dyn ConsoleSink>> = RwLock::new(None);

/// Instala o sink do console, substituindo o anterior
pub fn install_sink(sink: &'static dyn ConsoleSink) {
    *SINK.write() = Some(sink);
}

/// Remove o sink; as linhas seguintes são descartadas
pub fn remove_sink() {
    *SINK.write() = None;
}

/// Emite uma string
#[inline]
pub fn emit_str(s: &str) {
    if let Some(sink) = *SINK.read() {
        sink.write_str(s);
    }
}

/// Emite fim de linha
#[inline]
pub fn emit_nl() {
    emit_str("\n");
}

/// Emite um valor em hexadecimal (`0x...`)
pub fn emit_hex(value: u64) {
    let mut buf = [0u8; 18];
    emit_str(format_hex(value, &mut buf));
}

/// Emite um valor em decimal com sinal
pub fn emit_dec(value: i64) {
    let mut buf = [0u8; 20];
    emit_str(format_dec(value, &mut buf));
}

#[inline]
const fn nibble_to_ascii(nibble: u8) -> u8 {
    if nibble < 10 {
        b'0' + nibble
    } else {
        b'a' + (nibble - 10)
    }
}

/// Formata `value` como `0x<hex>` sem zeros à esquerda
pub fn format_hex(value: u64, buf: &mut [u8; 18]) -> &str {
    let mut pos = buf.len();
    let mut v = value;
    loop {
        pos -= 1;
        buf[pos] = nibble_to_ascii((v & 0xF) as u8);
        v >>= 4;
        if v == 0 {
            break;
        }
    }
    pos -= 1;
    buf[pos] = b'x';
    pos -= 1;
    buf[pos] = b'0';
    core::str::from_utf8(&buf[pos..]).unwrap_or("0x?")
}

/// Formata `value` em decimal
pub fn format_dec(value: i64, buf: &mut [u8; 20]) -> &str {
    let mut pos = buf.len();
    let mut v = value.unsigned_abs();
    loop {
        pos -= 1;
        buf[pos] = b'0' + (v % 10) as u8;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    if value < 0 {
        pos -= 1;
        buf[pos] = b'-';
    }
    core::str::from_utf8(&buf[pos..]).unwrap_or("?")
}
