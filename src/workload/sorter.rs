//! Stage 3: sort-key transposition.
//!
//! The external sort utility ranks lines by their leading field, so the
//! mapper moves `moves` to the front (zero-padded so text order equals
//! numeric order) and the reducer puts the fields back afterwards. Nothing
//! is filtered or aggregated here.

use crate::error::Result;
use crate::schema::{MoveQuantity, RankedQuantity};
use crate::{Mapper, Reducer};

/// `user,diff,max,moves` -> `moves(pad10) \t user \t diff(pad10) \t max`.
pub struct SorterMapper;

impl SorterMapper {
    pub fn new() -> Self {
        SorterMapper
    }
}

impl Mapper for SorterMapper {
    fn map(&mut self, line: &str) -> Result<Option<String>> {
        let q = MoveQuantity::parse(line)?;
        let ranked = RankedQuantity {
            moves: q.moves,
            user_id: q.user_id,
            diff_ts: q.diff_ts,
            max_moves: q.max_moves,
        };
        Ok(Some(ranked.to_string()))
    }
}

/// Reverses the transposition for final output, keeping `diff_ts` padded.
pub struct SorterReducer;

impl SorterReducer {
    pub fn new() -> Self {
        SorterReducer
    }
}

impl Reducer for SorterReducer {
    fn reduce(&mut self, line: &str) -> Result<Option<String>> {
        let r = RankedQuantity::parse(line)?;
        Ok(Some(format!(
            "{}\t{:010}\t{}\t{}",
            r.user_id, r.diff_ts, r.max_moves, r.moves
        )))
    }

    fn finish(&mut self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapper_leads_with_padded_moves() {
        let mut mapper = SorterMapper::new();
        let out = mapper.map("2\t3000000\t11\t10").unwrap().unwrap();
        assert_eq!(out, "0000000010\t2\t0003000000\t11");
    }

    #[test]
    fn reducer_restores_field_order() {
        let mut reducer = SorterReducer::new();
        let out = reducer.reduce("0000000010\t2\t0003000000\t11").unwrap().unwrap();
        assert_eq!(out, "2\t0003000000\t11\t10");
        assert_eq!(reducer.finish(), None);
    }

    #[test]
    fn transposition_round_trips_values() {
        let original = MoveQuantity {
            user_id: 42,
            diff_ts: 987_654,
            max_moves: 4,
            moves: 7,
        };
        let mut mapper = SorterMapper::new();
        let mut reducer = SorterReducer::new();
        let ranked = mapper.map(&original.to_string()).unwrap().unwrap();
        let restored = reducer.reduce(&ranked).unwrap().unwrap();
        assert_eq!(MoveQuantity::parse(&restored).unwrap(), original);
    }

    #[test]
    fn every_field_validated() {
        let mut mapper = SorterMapper::new();
        assert!(mapper.map("2\t3000000\t11").is_err());
        let mut reducer = SorterReducer::new();
        assert!(reducer.reduce("ten\t2\t0003000000\t11").is_err());
    }
}
