use crate::CpuState;

impl CpuState {
    // pc | next three memory bytes | registers, all in hex. Bytes past the end
    // of memory show as "--".
    pub fn trace(&self) -> String {
        let mut out = format!("TRACE: {:02X} |", self.pc);
        for offset in 0..3 {
            match self.mem.read(self.pc.saturating_add(offset)) {
                Ok(byte) => out.push_str(&format!(" {byte:02X}")),
                Err(_) => out.push_str(" --"),
            }
        }
        out.push_str(" |");
        for reg in self.regs.as_slice() {
            out.push_str(&format!(" {reg:02X}"));
        }
        out
    }
}
