use super::common::utils::{read_length, skip_blob, skip_blobs};
use crate::types::RdbOk;
use std::io::Read;

/// Plain list or set: a count followed by that many strings.
pub fn skip_linked_list<R: Read + ?Sized>(input: &mut R) -> RdbOk {
    let len = read_length(input)?;
    skip_blobs(input, len)
}

/// Quicklist of ziplists. Every node is one opaque blob.
pub fn skip_quicklist<R: Read + ?Sized>(input: &mut R) -> RdbOk {
    skip_linked_list(input)
}

/// Quicklist of listpacks, each node prefixed by its container kind
/// (plain element or packed listpack).
pub fn skip_quicklist_2<R: Read + ?Sized>(input: &mut R) -> RdbOk {
    let len = read_length(input)?;

    for _ in 0..len {
        let _container = read_length(input)?;
        skip_blob(input)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_skip_linked_list() {
        let data = vec![3, 1, b'a', 0xC0, 0x05, 2, b'b', b'c', 0xEE];
        let mut cursor = Cursor::new(data);
        skip_linked_list(&mut cursor).unwrap();
        assert_eq!(8, cursor.position());
    }

    #[test]
    fn test_skip_empty_list() {
        let mut cursor = Cursor::new(vec![0, 0xEE]);
        skip_linked_list(&mut cursor).unwrap();
        assert_eq!(1, cursor.position());
    }

    #[test]
    fn test_skip_quicklist() {
        let data = vec![2, 3, 0x0B, 0x00, 0xFF, 1, 0xFF, 0xEE];
        let mut cursor = Cursor::new(data);
        skip_quicklist(&mut cursor).unwrap();
        assert_eq!(7, cursor.position());
    }

    #[test]
    fn test_skip_quicklist_2() {
        // plain node, then a packed node
        let data = vec![2, 1, 2, b'x', b'y', 2, 3, 0xAA, 0xBB, 0xFF, 0xEE];
        let mut cursor = Cursor::new(data);
        skip_quicklist_2(&mut cursor).unwrap();
        assert_eq!(10, cursor.position());
    }

    #[test]
    fn test_skip_truncated_list_fails() {
        let mut cursor = Cursor::new(vec![2, 1, b'a']);
        assert!(skip_linked_list(&mut cursor).is_err());
    }
}
