// =============================================================================
// DRIVER LOGGING SYSTEM - ZERO OVERHEAD
// =============================================================================
//
// ARQUITETURA:
// - Usa features do Cargo para compile-time filtering
// - Com feature "no_logs", TODOS os macros viram expressões vazias
// - SEM core::fmt - apenas strings literais + valores hex/decimal
// - Escreve APENAS no console (klog::console)
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Falhas de registro, falta de espaço
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Ciclo de vida (init/exit do driver)
// - DEBUG: Passos individuais do registro
// - TRACE: Cada open/read/write/lseek/release (kdev!)
//
// COMO USAR:
//   kinfo!("(PCD) Driver inicializado");          // Apenas string
//   kinfo!("(PCD) Capacidade=", 512);             // String + hex
//   kdev!(dev, "Current file position: ", pos);   // (major:minor) + decimal
//
// =============================================================================

use crate::fs::devfs::DeviceNumber;
use crate::klog::console;

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";

/// Emite `prefixo (major:minor) `
pub fn emit_dev_prefix(prefix: &str, dev: DeviceNumber) {
    console::emit_str(prefix);
    console::emit_str("(");
    console::emit_dec(dev.major as i64);
    console::emit_str(":");
    console::emit_dec(dev.minor as i64);
    console::emit_str(") ");
}

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    ($msg:expr) => {{
        $crate::klog::console::emit_str($crate::klog::logging::P_ERROR);
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::klog::console::emit_str($crate::klog::logging::P_ERROR);
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_hex($val as u64);
        $crate::klog::console::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARN
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {{
        $crate::klog::console::emit_str($crate::klog::logging::P_WARN);
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::klog::console::emit_str($crate::klog::logging::P_WARN);
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_hex($val as u64);
        $crate::klog::console::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================

#[cfg(all(
    not(feature = "no_logs"),
    any(feature = "log_info", feature = "log_debug", feature = "log_trace")
))]
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {{
        $crate::klog::console::emit_str($crate::klog::logging::P_INFO);
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::klog::console::emit_str($crate::klog::logging::P_INFO);
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_hex($val as u64);
        $crate::klog::console::emit_nl();
    }};
}

#[cfg(not(all(
    not(feature = "no_logs"),
    any(feature = "log_info", feature = "log_debug", feature = "log_trace")
)))]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================

#[cfg(all(
    not(feature = "no_logs"),
    any(feature = "log_debug", feature = "log_trace")
))]
#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {{
        $crate::klog::console::emit_str($crate::klog::logging::P_DEBUG);
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::klog::console::emit_str($crate::klog::logging::P_DEBUG);
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_hex($val as u64);
        $crate::klog::console::emit_nl();
    }};
}

#[cfg(not(all(
    not(feature = "no_logs"),
    any(feature = "log_debug", feature = "log_trace")
)))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS POR DISPOSITIVO
// =============================================================================
//
// kdev!     - TRACE com prefixo "(major:minor)", valor em decimal (único
//             macro do nível TRACE: todo trace é de um dispositivo)
// kdev_err! - ERROR com prefixo "(major:minor)"
//

#[cfg(all(not(feature = "no_logs"), feature = "log_trace"))]
#[macro_export]
macro_rules! kdev {
    ($dev:expr, $msg:expr) => {{
        $crate::klog::logging::emit_dev_prefix($crate::klog::logging::P_TRACE, $dev);
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_nl();
    }};
    ($dev:expr, $msg:expr, $val:expr) => {{
        $crate::klog::logging::emit_dev_prefix($crate::klog::logging::P_TRACE, $dev);
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_dec($val as i64);
        $crate::klog::console::emit_nl();
    }};
}

#[cfg(not(all(not(feature = "no_logs"), feature = "log_trace")))]
#[macro_export]
macro_rules! kdev {
    ($($t:tt)*) => {{}};
}

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kdev_err {
    ($dev:expr, $msg:expr) => {{
        $crate::klog::logging::emit_dev_prefix($crate::klog::logging::P_ERROR, $dev);
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kdev_err {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE STATUS (OK/FAIL)
// =============================================================================

/// kok! - Log de sucesso (prefixo verde [OK]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kok {
    ($msg:expr) => {{
        $crate::klog::console::emit_str("\x1b[32m[OK]\x1b[0m ");
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kok {
    ($($t:tt)*) => {{}};
}

/// kfail! - Log de falha (prefixo vermelho [FAIL]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kfail {
    ($msg:expr) => {{
        $crate::klog::console::emit_str("\x1b[1;31m[FAIL]\x1b[0m ");
        $crate::klog::console::emit_str($msg);
        $crate::klog::console::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kfail {
    ($($t:tt)*) => {{}};
}
