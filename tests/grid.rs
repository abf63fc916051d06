use seating::{Cell, Error, Position, SeatMap};

#[test]
fn parse_seat_chars() {
    let map = SeatMap::from_rows(["L.#", "#L."]).unwrap();

    assert_eq!(map.width(), 3);
    assert_eq!(map.height(), 2);
    assert_eq!(map.cell_at(&Position::new(0, 0)).unwrap(), Cell::Seat(false));
    assert_eq!(map.cell_at(&Position::new(0, 1)).unwrap(), Cell::Floor);
    assert_eq!(map.cell_at(&Position::new(0, 2)).unwrap(), Cell::Seat(true));
    assert_eq!(map.cell_at(&Position::new(1, 0)).unwrap(), Cell::Seat(true));
    assert_eq!(map.occupied_count(), 2);
    assert_eq!(map.seat_count(), 4);
}

#[test]
fn reject_invalid_char() {
    let err = SeatMap::from_rows(["L.L", "L?L"]).unwrap_err();
    assert!(matches!(err, Error::InvalidSeatChar('?')));
}

#[test]
fn reject_inconsistent_rows() {
    let err = SeatMap::from_rows(["L.L", "L."]).unwrap_err();
    assert!(matches!(err, Error::InconsistentSeatMapRow(2, 3)));
}

#[test]
fn reject_empty_map() {
    assert!(matches!(
        SeatMap::from_rows(Vec::<String>::new()),
        Err(Error::EmptySeatMap)
    ));
    assert!(matches!(SeatMap::from_rows([""]), Err(Error::EmptySeatMap)));
}

#[test]
fn cell_at_out_of_bounds() {
    let map = SeatMap::from_rows(["L.", ".L"]).unwrap();

    assert!(matches!(
        map.cell_at(&Position::new(2, 0)),
        Err(Error::OutOfBounds(_, 2, 2))
    ));
    assert!(matches!(
        map.cell_at(&Position::new(0, 2)),
        Err(Error::OutOfBounds(_, 2, 2))
    ));
    assert_eq!(map.cell(&Position::new(1, 5)), None);
}

#[test]
fn parse_text_and_display() {
    let text = "#.##.##.##\r\n#######.##\r\n#.#.#..#..\r\n\r\n";
    let map = text.parse::<SeatMap>().unwrap();

    assert_eq!(map.height(), 3);
    assert_eq!(map.to_string(), "#.##.##.##\n#######.##\n#.#.#..#..");
    assert_eq!(map.to_string().parse::<SeatMap>().unwrap(), map);
}

#[test]
fn maps_of_different_size_are_not_equal() {
    let small = SeatMap::from_rows(["LL"]).unwrap();
    let large = SeatMap::from_rows(["LL", "LL"]).unwrap();
    let flat = SeatMap::from_rows(["LLLL"]).unwrap();

    assert_ne!(small, large);
    assert_ne!(large, flat);
    assert_eq!(large, SeatMap::from_rows(["LL", "LL"]).unwrap());
}

#[test]
fn positions_in_row_major_order() {
    let map = SeatMap::from_rows(["...", "..."]).unwrap();
    let positions = map.positions().map(|p| (p.r(), p.c())).collect::<Vec<_>>();

    assert_eq!(
        positions,
        vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
    );
}
