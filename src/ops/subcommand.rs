use bytes::Bytes;

/// Capabilities every BITFIELD subcommand exposes to the command assembler.
pub trait Subcommand {
    /// Number of tokens `append_tokens` will push. The assembler trusts this
    /// count to preallocate the token buffer, so both methods must stay in
    /// lockstep.
    fn token_count(&self) -> usize;

    /// True when the subcommand leaves the value at the key untouched. A
    /// command built only from read-only subcommands may be routed to a
    /// replica.
    fn is_readonly(&self) -> bool;

    /// Appends this subcommand's tokens, in wire order, to `buf`.
    fn append_tokens(&self, buf: &mut Vec<Bytes>);
}
