//! # Printer Device Transport
//!
//! Writes print jobs to a printer character device: a Bluetooth RFCOMM
//! binding (`/dev/rfcomm0`) or a USB/parallel line printer (`/dev/usb/lp0`,
//! `/dev/lp0`).
//!
//! ## TTY Configuration
//!
//! TTY devices are switched to raw mode so binary raster data is transmitted
//! without modification:
//!
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8 (8 data bits, no parity)
//! - **No echo**: Disable ECHO, ECHONL
//! - **Non-canonical mode**: Disable ICANON (no line buffering)
//!
//! Line printer devices are not TTYs and are written as-is.
//!
//! ## Chunked Writes
//!
//! Large data blocks are written in chunks to avoid overwhelming the
//! device buffer. The default chunk size is 4096 bytes with a small
//! delay between chunks.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::BarcodeError;

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// Delay between chunks (milliseconds)
const CHUNK_DELAY_MS: u64 = 2;

/// Device directories searched by [`discover_devices`].
const DEVICE_DIRS: &[&str] = &["/dev", "/dev/usb"];

/// # Device Printer Transport
///
/// ## Example
///
/// ```no_run
/// use barcode_printer::transport::DeviceTransport;
/// use barcode_printer::protocol::commands;
///
/// let mut transport = DeviceTransport::open("/dev/rfcomm0")?;
/// transport.write_all(&commands::init())?;
///
/// # Ok::<(), barcode_printer::error::BarcodeError>(())
/// ```
pub struct DeviceTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl DeviceTransport {
    /// Open a printer device for writing.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device doesn't exist
    /// - Permission denied (may need root or the lp/dialout group)
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, BarcodeError> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            BarcodeError::Transport(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_device(&file)?;

        Ok(Self {
            file,
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::from_millis(CHUNK_DELAY_MS),
        })
    }

    /// Set the chunk size for large writes.
    ///
    /// Default is 4096 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay between chunks.
    ///
    /// Default is 2ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }

    /// Write data to the printer and flush.
    ///
    /// Small writes are sent directly. Large writes are chunked.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), BarcodeError> {
        write_chunked(&mut self.file, data, self.chunk_size, self.chunk_delay)?;

        self.file
            .flush()
            .map_err(|e| BarcodeError::Transport(format!("Flush failed: {}", e)))?;

        Ok(())
    }
}

/// Write `data` in `chunk_size` pieces, sleeping `delay` after each piece.
fn write_chunked<W: Write>(
    out: &mut W,
    data: &[u8],
    chunk_size: usize,
    delay: Duration,
) -> Result<(), BarcodeError> {
    if data.len() <= chunk_size {
        return out
            .write_all(data)
            .map_err(|e| BarcodeError::Transport(format!("Write failed: {}", e)));
    }

    for chunk in data.chunks(chunk_size) {
        out.write_all(chunk)
            .map_err(|e| BarcodeError::Transport(format!("Write failed: {}", e)))?;

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    Ok(())
}

/// Whether a `/dev` entry name looks like a printer device.
///
/// `rfcomm<N>` is a bound Bluetooth serial port; `lp<N>` is a parallel or
/// USB line printer.
pub fn is_printer_device_name(name: &str) -> bool {
    ["rfcomm", "lp"].iter().any(|prefix| {
        name.strip_prefix(prefix)
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    })
}

/// List printer device paths that exist on this machine, sorted.
pub fn discover_devices() -> Vec<String> {
    let mut devices: Vec<String> = DEVICE_DIRS
        .iter()
        .filter_map(|dir| fs::read_dir(dir).ok().map(|entries| (dir, entries)))
        .flat_map(|(dir, entries)| {
            entries.filter_map(move |entry| {
                let name = entry.ok()?.file_name().into_string().ok()?;
                is_printer_device_name(&name).then(|| format!("{}/{}", dir, name))
            })
        })
        .collect();
    devices.sort();
    devices
}

/// Put TTY devices into raw mode. Other device nodes are written as-is.
#[cfg(unix)]
fn configure_device(file: &File) -> Result<(), BarcodeError> {
    if is_tty(file) {
        configure_tty_raw(file.as_raw_fd())?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn configure_device(_file: &File) -> Result<(), BarcodeError> {
    // No termios here, the device is used with its current settings
    Ok(())
}

#[cfg(unix)]
fn is_tty(file: &File) -> bool {
    unsafe { libc::isatty(file.as_raw_fd()) == 1 }
}

/// Configure a file descriptor for raw TTY mode.
///
/// Note: IXON/IXOFF/IXANY disable XON/XOFF software flow control. This is
/// required because 0x11 (XON/DC1) and 0x13 (XOFF/DC3) can appear in raster
/// data.
#[cfg(unix)]
fn configure_tty_raw(fd: i32) -> Result<(), BarcodeError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(BarcodeError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(BarcodeError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
