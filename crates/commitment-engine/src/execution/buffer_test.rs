use super::*;

#[test]
fn test_shrink_is_a_length_update_only() {
    let mut buffer = StreamBuffer::new(vec![1u32, 2, 3, 4]);
    assert_eq!(buffer.len(), 4);
    buffer.shrink(2);
    assert_eq!(buffer.len(), 2);
    assert!(!buffer.is_empty());
    // the allocation still holds the untouched tail
    buffer.handle().read(|values| assert_eq!(values, [1, 2]));
}

#[test]
fn test_handles_capture_the_length_at_creation() {
    let mut buffer = StreamBuffer::new(vec![5u32, 6, 7]);
    let full = buffer.handle();
    buffer.shrink(1);
    full.read(|values| assert_eq!(values, [5, 6, 7]));
    buffer.handle().read(|values| assert_eq!(values, [5]));
}

#[test]
fn test_writes_are_visible_to_later_reads() {
    let buffer = StreamBuffer::new(vec![0u64; 3]);
    let handle = buffer.handle();
    handle.write(|values| {
        for (i, value) in values.iter_mut().enumerate() {
            *value = i as u64;
        }
    });
    buffer.handle().read(|values| assert_eq!(values, [0, 1, 2]));
}
