//! Free RAM measurement
//!
//! The RP2040 runtime places the stack at the top of RAM growing down and
//! static data at the bottom. The gap between the end of static data
//! (`__sheap`, provided by cortex-m-rt) and the current stack pointer is
//! the memory still free.

/// Bytes between the end of static data and the stack pointer
///
/// Zero if the stack has already grown into static data.
pub fn free_ram_between(stack_pointer: u32, heap_start: u32) -> u32 {
    stack_pointer.saturating_sub(heap_start)
}

/// Measure free RAM on the running core
#[cfg(target_arch = "arm")]
pub fn free_ram() -> u32 {
    extern "C" {
        static __sheap: u32;
    }

    #[allow(unused_unsafe)]
    let heap_start = unsafe { core::ptr::addr_of!(__sheap) as u32 };
    let stack_pointer = cortex_m::register::msp::read();
    free_ram_between(stack_pointer, heap_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap() {
        assert_eq!(free_ram_between(0x2004_1F00, 0x2000_0800), 0x4_1700);
    }

    #[test]
    fn test_collided_stack() {
        assert_eq!(free_ram_between(0x2000_0400, 0x2000_0800), 0);
        assert_eq!(free_ram_between(0x2000_0800, 0x2000_0800), 0);
    }
}
