pub const DIGITS: [char; 36] = [
    '0' , '1' , '2' , '3' , '4' , '5' ,
    '6' , '7' , '8' , '9' , 'A' , 'B' ,
    'C' , 'D' , 'E' , 'F' , 'G' , 'H' ,
    'I' , 'J' , 'K' , 'L' , 'M' , 'N' ,
    'O' , 'P' , 'Q' , 'R' , 'S' , 'T' ,
    'U' , 'V' , 'W' , 'X' , 'Y' , 'Z'
];

pub const MIN_RADIX: u32 = 2;

pub const MAX_RADIX: u32 = DIGITS.len() as u32;
