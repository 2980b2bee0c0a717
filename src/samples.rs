use serde_json::{json, Value};

/// Sample fixture written in place of a missing input file.
///
/// Names containing a `1` get the small four share quadratic, everything else
/// the ten share, threshold seven set with values in several bases.
pub fn sample_for(file_name: &str) -> Value {
    if file_name.contains('1') {
        json!({
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "111" },
            "3": { "base": "10", "value": "12" },
            "6": { "base": "4", "value": "213" }
        })
    } else {
        json!({
            "keys": { "n": 10, "k": 7 },
            "1": { "base": "6", "value": "13444211440455345511" },
            "2": { "base": "15", "value": "aed7015a346d635" },
            "3": { "base": "15", "value": "6aeeb69631c227c" },
            "4": { "base": "16", "value": "e1b5e05623d881f" },
            "5": { "base": "8", "value": "316034514573652620673" },
            "6": { "base": "3", "value": "2122212201122002221120200210011020220200" },
            "7": { "base": "3", "value": "20120221122211000100210021102001201112121" },
            "8": { "base": "6", "value": "20220554335330240002224253" },
            "9": { "base": "12", "value": "45153788322a1255483" },
            "10": { "base": "7", "value": "1101613130313526312514143" }
        })
    }
}

#[cfg(test)]
mod test {
    use super::sample_for;
    use shamir::{recover_secret, BigInt, ShareSet};

    fn secret_of(file_name: &str) -> BigInt {
        let shares = ShareSet::from_json(&sample_for(file_name).to_string()).unwrap();

        recover_secret(&shares).unwrap()
    }

    #[test]
    fn test_first_sample() {
        assert_eq!(secret_of("testcase1.json"), BigInt::from(3));
    }

    #[test]
    fn test_second_sample() {
        assert_eq!(
            secret_of("testcase2.json"),
            "-6290016743746469796".parse::<BigInt>().unwrap()
        );
    }
}
