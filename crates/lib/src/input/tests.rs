use crate::env::Size;
use crate::input::{ErrorKind, IStr, IStrError, Nl, NonEmpty, Split, B, W};

fn input(data: &'static str) -> IStr {
    IStr::new(data.as_bytes(), Size::ZERO)
}

#[test]
fn words_and_integers() -> Result<(), IStrError> {
    let mut p = input("move 12 from -3");

    let W(word) = p.next::<W<&str>>()?;
    assert_eq!(word, "move");
    assert_eq!(p.next::<u32>()?, 12);
    let W(word) = p.next::<W<&str>>()?;
    assert_eq!(word, "from");
    assert_eq!(p.next::<i32>()?, -3);
    assert!(p.try_next::<u32>()?.is_none());
    Ok(())
}

#[test]
fn bad_integer() {
    let mut p = input("12x 13");

    let Err(error) = p.next::<u32>() else {
        panic!("expected error");
    };

    assert!(matches!(error.kind(), ErrorKind::NotInteger("12x")));
}

#[test]
fn split_tuples() -> Result<(), IStrError> {
    let mut p = input("4-7,9-19");

    let Split((Split([a, b]), Split([c, d]))) =
        p.next::<Split<',', (Split<'-', [u32; 2]>, Split<'-', [u32; 2]>)>>()?;

    assert_eq!((a, b, c, d), (4, 7, 9, 19));
    Ok(())
}

#[test]
fn split_missing_piece() -> Result<(), IStrError> {
    let mut p = input("4");
    let out = p.try_next::<Split<',', (u32, u32)>>()?;
    assert!(out.is_none());
    Ok(())
}

#[test]
fn lines() -> Result<(), IStrError> {
    let mut p = input("1 2\n3 4\n");

    assert_eq!(p.try_line::<(u32, u32)>()?, Some((1, 2)));
    assert_eq!(p.try_line::<(u32, u32)>()?, Some((3, 4)));
    assert_eq!(p.try_line::<(u32, u32)>()?, None);
    Ok(())
}

#[test]
fn line_required() {
    let mut p = input("");

    let Err(error) = p.line::<u32>() else {
        panic!("expected error");
    };

    assert!(matches!(error.kind(), ErrorKind::ExpectedLine));
}

#[test]
fn arrays() -> Result<(), IStrError> {
    let mut p = input("1 2 3");
    assert_eq!(p.next::<[u32; 3]>()?, [1, 2, 3]);

    let mut p = input("1 2");

    let Err(error) = p.next::<[u32; 3]>() else {
        panic!("expected error");
    };

    assert!(matches!(error.kind(), ErrorKind::BadArray(3, 2)));
    Ok(())
}

#[test]
fn whitespace() -> Result<(), IStrError> {
    let mut p = input("\n\n  x");
    assert_eq!(p.ws()?, 2);
    let W(word) = p.next::<W<&str>>()?;
    assert_eq!(word, "x");
    Ok(())
}

#[test]
fn bytes_and_chars() -> Result<(), IStrError> {
    let mut p = input("ab");
    let B(b) = p.next::<B>()?;
    assert_eq!(b, b'a');
    assert_eq!(p.next::<char>()?, 'b');
    assert!(p.try_next::<char>()?.is_none());
    Ok(())
}

#[test]
fn until_end_of_line() -> Result<(), IStrError> {
    let mut p = input("42\nrest");
    let Nl(value) = p.next::<Nl<u32>>()?;
    assert_eq!(value, 42);
    assert_eq!(p.next::<&str>()?, "rest");
    Ok(())
}

#[test]
fn non_empty() -> Result<(), IStrError> {
    let mut p = input("");
    assert!(p.try_next::<NonEmpty<&str>>()?.is_none());

    let mut p = input("x");
    assert!(p.try_next::<NonEmpty<&str>>()?.is_some());
    Ok(())
}

#[test]
fn parsed_iterator() -> Result<(), IStrError> {
    let mut p = input("1 2 3 4");
    let values = p.iter::<u32>().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(values, [1, 2, 3, 4]);
    Ok(())
}
