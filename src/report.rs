use crate::args::Args;
use crate::bearing::bearing;
use crate::trig::{deg_to_rad, rad_to_deg};
use std::f64::consts::PI;
use std::io::{self, Write};

pub fn report<W: Write>(out: &mut W, args: &Args) -> io::Result<()> {
    let [sx, sy] = args.start();
    let [ex, ey] = args.end();
    let [cx, cy] = args.center();
    writeln!(out, "test values:")?;
    writeln!(out, "    start : [{sx:.5},{sy:.5}]")?;
    writeln!(out, "      end : [{ex:.5},{ey:.5}]")?;
    writeln!(out, "   center : [{cx:.5},{cy:.5}]")?;
    writeln!(out, "direction :  {}", args.direction)?;
    writeln!(out, " segments :  {}", args.segments)?;
    writeln!(out)?;

    reference_table(out)?;

    let start = bearing(args.start(), args.center());
    let end = bearing(args.end(), args.center());
    writeln!(out, "Start angle : {:.5}\u{00B0}", rad_to_deg(start))?;
    writeln!(out, "End angle : {:.5}\u{00B0}", rad_to_deg(end))?;
    Ok(())
}

fn reference_table<W: Write>(out: &mut W) -> io::Result<()> {
    let rows: [(&str, f64); 5] = [
        ("0", 0.0),
        ("90", 90.0),
        ("180", 180.0),
        ("270", 270.0),
        ("360", 360.0),
    ];
    let turns: [(&str, f64); 5] = [
        ("0", 0.0),
        ("\u{03C0}/2", PI / 2.0),
        ("\u{03C0}", PI),
        ("3\u{03C0}/2", 3.0 * PI / 2.0),
        ("2\u{03C0}", 2.0 * PI),
    ];
    for ((deg_label, deg), (rad_label, rad)) in rows.iter().zip(turns.iter()) {
        writeln!(out, "{deg_label} deg in rad = {:.3}", deg_to_rad(*deg))?;
        writeln!(out, "{rad_label} rad in deg = {:.3}", rad_to_deg(*rad))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn render(argv: &[&str]) -> String {
        let args = Args::try_parse_from(std::iter::once("arcgen").chain(argv.iter().copied())).unwrap();
        let mut buf = Vec::new();
        report(&mut buf, &args).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn full_layout() {
        let text = render(&["0", "10", "10", "0", "0", "0", "CW"]);
        let expected = "\
test values:
    start : [0.00000,10.00000]
      end : [10.00000,0.00000]
   center : [0.00000,0.00000]
direction :  CW
 segments :  12

0 deg in rad = 0.000
0 rad in deg = 0.000
90 deg in rad = 1.571
\u{03C0}/2 rad in deg = 90.000
180 deg in rad = 3.142
\u{03C0} rad in deg = 180.000
270 deg in rad = 4.712
3\u{03C0}/2 rad in deg = 270.000
360 deg in rad = 6.283
2\u{03C0} rad in deg = 360.000
Start angle : 90.00000\u{00B0}
End angle : 0.00000\u{00B0}
";
        assert_eq!(text, expected);
    }

    #[test]
    fn flat_arc() {
        let text = render(&["0", "0", "10", "0", "0", "0", "CCW"]);
        assert!(text.contains("direction :  CCW\n"));
        assert!(text.contains("Start angle : 90.00000\u{00B0}\n"));
        assert!(text.contains("End angle : 0.00000\u{00B0}\n"));
    }

    #[test]
    fn echoes_at_five_places() {
        let text = render(&["1.234567", "-2", "3", "4", "-5.5", "6", "1", "360"]);
        assert!(text.contains("    start : [1.23457,-2.00000]\n"));
        assert!(text.contains("   center : [-5.50000,6.00000]\n"));
        assert!(text.contains(" segments :  360\n"));
    }

    #[test]
    fn below_center() {
        let text = render(&["5", "-10", "5", "10", "5", "0", "cw"]);
        assert!(text.contains("Start angle : -90.00000\u{00B0}\n"));
        assert!(text.contains("End angle : 90.00000\u{00B0}\n"));
    }
}
