use basicalc::get_result;

fn assert_eval(statement: &str, expected: &str) {
    let rendered = get_result(statement);
    assert_eq!(rendered, expected, "statement: {statement}");
}

fn assert_error(statement: &str, fragment: &str) {
    let rendered = get_result(statement);
    assert!(rendered.starts_with("Error(s):\n\n"),
            "statement succeeded but was expected to fail: {statement}\n{rendered}");
    assert!(rendered.contains(fragment),
            "wrong error for: {statement}\n{rendered}");
}

#[test]
fn integer_literals() {
    assert_eval("0", "0");
    assert_eval("-0", "0");
    assert_eval("1234", "1234");
    assert_eval("-9999", "-9999");
    assert_eval("2147483648", "2147483648");
    assert_eval("4294967295", "4294967295");
    assert_eval("4728542116258799982", "4728542116258799982");
    assert_eval("9223372036854775807", "9223372036854775807");
    assert_eval("-9223372036854775807", "-9223372036854775807");
}

#[test]
fn float_literals_and_rendering() {
    assert_eval("-0.0", "0");
    assert_eval("0.0", "0");
    assert_eval("9.0", "9");
    assert_eval("-0.0001", "-0,0001");
    assert_eval("-0.00001", "-1E-05");
    assert_eval("-0.0000001", "-1E-07");
    assert_eval("0.0000000000025", "2,5E-12");
    assert_eval("123456789.0", "123456789");
    assert_eval("1000000000000000000000000000.0000123", "1E+27");
    assert_eval("-1124124.253452645745729995600000001", "-1124124,25345265");
}

#[test]
fn boolean_literals() {
    assert_eval("True", "True");
    assert_eval("False", "False");
}

#[test]
fn power() {
    assert_eval("2 ^ 8", "256");
    assert_eval("2 ^ -3 ^ 4", "4,13590306276514E-25");
    assert_eval("3 * (((4 ^ 2.3) ^ 9.1) ^ -3.512)", "1,66725950718577E-44");
    assert_eval("2^8 - 3 * -4.1 ^ 2.3 ^ 9.1 ^ -3.512 + -4 ^ -3", "255,984375");
    assert_eval("4 ^ True ^ False + True ^ False + False", "2");
    assert_eval("(1.25 ^ 1.333005) + (0.5 ^ 3.5) + (-4.5 * -2) - (9.5 ^ 0.123456789) ^ 2 -2^3^4^0.2^-23",
                "8,691346377692");
}

#[test]
fn multiplication() {
    assert_eval("5*5*5*5*5-2*2*2*2*2+3*3*3*3*3", "3336");
    assert_eval("3.2 * 2 + 3 * 3.5 + 3.8 * 2 + 4 * 3.7 + 2 * 9.3 + 5 * 9.5 + 9.8 * 7", "174");
    assert_eval("0.1234 * 0.5678 - 0.0004 * 5 * 13.31 + True * True + False*False + False*True + True*False",
                "1,04344652");
    assert_eval("True*True*12*0.5*2.5*1.5*1*0.0001*True+2*False-100000*100", "-10000000,00225");
    assert_eval("7000 * 0.00000001 * 1000000 * 0.01111111 + 9.999999 * 2 * 3 * 4", "240,7777537");
}

#[test]
fn float_division() {
    assert_eval("5 / 3 + 1023 / 324234 - 124124 / 433 + 1000000.0235 / 32414 + 123 / 1 / 2 / 3 / -3 / -5/-9",
                "-254,291670505267");
    assert_eval("0.123 / 50034.00000001 + 5.5 / 2.5 + 123.5 - 92312 / 4124 - 2/-4/-5/-9/-20",
                "103,315353789291");
    assert_eval("1234567890123456.123456789101112 / 2.123456789 / -5235235 / 123 / 2 /1 / 0.9999",
                "-451485,38129948");
    assert_eval("-0.5 / 1.5 / 2.5 / 3.5 + 1000 / 10000 + 20000 / 200000 + 300000000/0.0000001",
                "3E+15");
}

#[test]
fn float_division_by_zero_follows_ieee() {
    assert_eval("1 / 0", "Infinity");
    assert_eval("-1 / 0", "-Infinity");
    assert_eval("0.0 / 0", "NaN");
}

#[test]
fn integer_division() {
    assert_eval("3.1 \\ 2 + 3.6 \\ 2 + 3.5 \\ 2 + 9.3 \\ 3 + 9.5 \\ 3 + 9.99 \\ 3", "14");
    assert_eval("3 \\ 2.5 + 3 \\ 2.2 + 3 \\ 2.7 + 9 \\ 3.3 + 9 \\ 3.5 + 9 \\ 3.8", "10");
    assert_eval("3 / 2.5 * 3 \\ 2.2 + 3 / 2.7 * 9 \\ 3.3 + 9 / 3.5 * 9 \\ 3.8", "10");
    assert_eval("(3.5 ^ -4) - (123.4567 - 10 ^ 2 / 3) \\ 1.42 - 3 * 2.546 + 312 / (3 / 2.3) \\ 1.34 + 0.123",
                "141,491663890046");
    assert_eval("123 \\ 2 \\ 1.5 + 53.5 \\ 4.5 - 2 \\ 4 + 0 \\ 4", "43");
}

#[test]
fn modulo() {
    assert_eval("4.7 Mod 2.4 Mod 3 Mod True Mod -25", "0,3");
    assert_eval("-4.3 Mod -9 Mod 2.5 Mod True Mod 0.987654321", "-0,8");
    assert_eval("-4.5 Mod -3.5 Mod 2 Mod 1.5", "-1");
    assert_eval(" -+--+123 Mod -+-(+-++(2)+--++ +(+-1)+ + -24)+   -2^3 ", "-23");
    assert_eval("124215.55 Mod 1234.5 + 0.5 Mod -1.5 - 2.5 Mod 9.0 + (-+3 Mod 1.5)",
                "763,550000000003");
    assert_eval("True Mod 3.5 + True Mod 2 + True Mod -3 + True Mod 123 + True Mod 2.5 * True Mod 125.5 + True Mod -0.5",
                "-5");
    assert_eval("1.54 Mod 7.5 ^ 3 - 2 - (-3) * (0.34) / 2.55 Mod 3.7 + (2.1 * 3) Mod 2",
                "0,240000000000001");
}

#[test]
fn left_bitshift() {
    assert_eval("3 << 2 + 3.2 << 2 + 3.5 << 2 + 3.7 << 2 - 2 << 2.3 - 2 << 2.5 - 2 << 2.7 + 2 << 4 - 4.5 << 3.5",
                "201326592");
    assert_eval("0.005 << 0.2 + 4 << 2 - 0.1234 << 9.5534 + 123124125 << 0.1 << 0.0005", "0");
}

#[test]
fn right_bitshift() {
    assert_eval("(2383.5 >> 2 + 2) + (123.3 >> 3) - (2451.8 >> 3.4) + (394.3 >> 3.6)", "-118");
    assert_eval("(123 >> 2.5 >> 0.51234 >> 0.3) + (124125523 >> 2 >> 3.7 >> 1.231245) - (12315.5 >> 3.5123 >> 0.99)",
                "969361");
}

#[test]
fn oversized_shift_amounts_are_masked() {
    assert_eval("1 << 64", "1");
    assert_eval("1 << 65", "2");
    assert_eval("-8 >> 70", "-1");
}

#[test]
fn comparisons() {
    assert_eval("(3 / 5 = 6 / 10) = (9 / 15 = 0.6)", "True");
    assert_eval("4 / 9 < 2.4 > 1.3 <= 424 >= 1 <> 32 = 12 <> 1 <= 312 >= 23 < 1 < 2 > 3 <> False > True",
                "True");
    assert_eval("False <> True > False < True < False = False > True = False < False", "True");
}

#[test]
fn bitwise_not() {
    assert_eval("Not -0.12345 + Not Not 3.4 + Not Not Not 2 - Not -3 + 2 + (Not 9) + Not (-3.123) + Not -3 / Not 2 + Not False + Not True",
                "-6");
    assert_eval("Not Not Not Not -4 * 3 + (Not 5.2 / 3.5 * Not 1.02) - Not 1 \\ 3 / 5 + (Not Not 0) + Not (0.1 - 0.5)",
                "-9");
    assert_eval("Not ((Not True + Not False) - Not Not Not False + Not Not True * Not True) + Not Not False * True",
                "-3");
    assert_eval("(Not 1.25) - (Not -2.25) + (Not 0.5) * (Not -32.5) + (Not -2.5) + (Not 3.5) + (Not 12.4)",
                "-51");
}

#[test]
fn bitwise_and() {
    assert_eval("3.5 And 2.5 + 3.6 And 2 - 3.2 And 4 + 2.5 And 4 + 2.3 And 7 + 3 And 2.8 + 2.3 And 9.6 And 5.5",
                "0");
    assert_eval("(3.5 And 2.5) + (3.6 And 2 - 3.2 And 4) + (2.5 And 4) + ((2.3 And 7) + (3 And 2.8)) + (2.3 And 9.6 And 5.5)",
                "11");
}

#[test]
fn bitwise_or() {
    assert_eval("True And 3 * 5 And 23 ^ 1.2 Or -32 Or 0.0 Or True - 2 And False And True + 2 Or True",
                "-1");
    assert_eval("False Or (True And True) Or ((False And True) + (False And False) + True Or False Or False) - True * False",
                "-1");
}

#[test]
fn logical_and_also_or_else() {
    assert_eval("3.5 AndAlso 1.2 OrElse 0.1 + (False OrElse -0.5) + True AndAlso True OrElse False + True",
                "True");
    assert_eval("(0.1234 AndAlso -234.123 AndAlso 0.0023) + 0.5 OrElse 1.4 + -24 OrElse -2 OrElse 0 + (124 AndAlso -0.123)",
                "True");
}

#[test]
fn bitwise_xor() {
    assert_eval("2.1 Xor 3 Xor 1 + 2.5 Xor 3 + 2.8 Xor 4 + 3.4 Xor 2 + 3.5 Xor 9 + 3.9 Xor 4 + 3.4 Xor 2.7 - 3.5 Xor 9.5",
                "-3");
    assert_eval("(0.25 Xor -0.123) Xor 0.67 + (0.23 Xor -9.02) Xor (-0.5 Xor 0.5) Xor 1.4 - (123 Xor 321)",
                "319");
}

#[test]
fn variables() {
    assert_eval("x = 3 y=5; -x * y + 3", "-12");
    assert_eval("x=-9 y=45 z=1000 x1=3 xx=4.5 yy = False; y / x + z + (x1 + x + x1 \\ xx) - xx And yy OrElse yy",
                "False");
    assert_eval("x1 = 5 x2 = 3 y1 = 1; (x1+x2*2)+y1*2+Sin(y1-1)", "13");
    assert_eval("x = 5 y=20 a = 24 ; Cos(a * y >> 2.3) ^ (x / Abs(Not 5))", "0,842559907342032");
}

#[test]
fn variables_with_signed_and_boolean_values() {
    assert_eval("b = True; b", "True");
    assert_eval("b = -True; b", "1");
    assert_eval("x = +2.5; x", "2,5");
    assert_eval("first = 1 first = 2; first", "1");
}

#[test]
fn functions() {
    assert_eval("Sin(30)", "-0,988031624092862");
    assert_eval("Sin(30) + Cos(0.25) - Abs(3.0 + True) + Acos(0.53) * Atan(0.93) + Ceiling(0.2) - \
                 Floor(5.8) + Exp(2.2) + Round(16) + Log10(3 + 5 / 4) + Sqrt(4) - Truncate(23.98)",
                "-0,607435759156953");
}

#[test]
fn rounding_is_ties_to_even() {
    assert_eval("Round(2.5)", "2");
    assert_eval("Round(3.5)", "4");
    assert_eval("Round(-0.5)", "0");
    assert_eval("Round(9.51)", "10");
}

#[test]
fn out_of_domain_functions_yield_nan() {
    assert_eval("Sqrt(-1)", "NaN");
    assert_eval("Acos(2)", "NaN");
    assert_eval("Log(-1)", "NaN");
}

#[test]
fn statement_splits_at_last_semicolon() {
    assert_eval("x = 1; x + 1", "2");
    // The prefix before the last `;` must be pure declarations, so an
    // earlier `;` is rejected there.
    assert_error("x = 1; y = 2; y", "Unexpected token");
}

#[test]
fn symbolic_operators_require_a_boundary() {
    assert_eval("1 << -2", "4611686018427387904");
    assert_eval("256 >> (2)", "64");
    assert_error("1 <<2", "Unexpected token");
    assert_error("3 <>3", "Unexpected token");
}

#[test]
fn keyword_operators_require_a_boundary() {
    assert_eval("1 And 1", "1");
    assert_eval("Not(3)", "-4");
    assert_error("1 And.5", "Unexpected token");
    assert_error("2 Mod.5", "Unexpected token");
}

#[test]
fn integer_literals_glued_to_a_word_are_an_error() {
    assert_error("2Mod 3", "Unexpected token");
    assert_error("1And 1", "Unexpected token");
}

#[test]
fn unknown_variable_is_an_error() {
    assert_error("foo + 1", "Unknown variable 'foo'");
    assert_error("x = 3; y", "Unknown variable 'y'");
}

#[test]
fn unbalanced_parentheses_are_an_error() {
    assert_error("(1 + 2", "Parentheses");
    assert_error("1 + 2)", "Parentheses");
}

#[test]
fn integer_division_by_zero_is_an_error() {
    assert_error("1 \\ 0", "Division by zero");
    assert_error("1 \\ 0.4", "Division by zero");
    assert_error("5 Mod 0", "Division by zero");
}

#[test]
fn literal_overflow_is_an_error() {
    assert_error("9223372036854775808", "out of range");
    assert_error("1.0e999", "out of range");
}

#[test]
fn malformed_statements_are_an_error() {
    assert_error("", "single value");
    assert_error("1 2", "single value");
    assert_error("1 +", "missing an operand");
}

#[test]
fn malformed_declarations_are_an_error() {
    assert_error("x 3; x", "Expected '='");
    assert_error("x =; x", "end of input");
    assert_error("3 = 4; 1", "Unexpected token");
}
