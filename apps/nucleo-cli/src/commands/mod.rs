pub mod compare;
pub mod sequence;

use nucleo_core::codon::ReadingFrame;

/// Map a 1-based frame number from the command line.
pub(crate) fn reading_frame(frame: u8) -> anyhow::Result<ReadingFrame> {
    let offset = usize::from(frame)
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("frame numbers start at 1"))?;
    Ok(ReadingFrame::try_from(offset)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_frame_numbers() {
        assert_eq!(reading_frame(1).unwrap(), ReadingFrame::First);
        assert_eq!(reading_frame(3).unwrap(), ReadingFrame::Third);
        assert!(reading_frame(0).is_err());
        assert!(reading_frame(4).is_err());
    }
}
