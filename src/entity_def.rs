use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref KEY_VALUE: Regex = Regex::new("\"([^\"]*)\"[ \t]+\"([^\"]*)\"").unwrap();
}

/// Quake-style entity definitions: a sequence of `{ "key" "value" ... }` blocks
pub struct EntityDefs {
    pub source: String,
}

impl EntityDefs {
    pub fn new(source: &str) -> EntityDefs {
        EntityDefs {
            source: source.to_owned()
        }
    }

    /// Calls `f` with the key/value pairs of each entity block, in order
    pub fn parse<F>(&self, mut f: F) where F: FnMut(HashMap<&str, &str>) {
        // find ranges of data between { and }
        let mut slices = Vec::new();
        let mut start = None;
        for (idx, v) in self.source.as_bytes().iter().enumerate() {
            if *v == b'{' {
                start = Some(idx + 1);
            }
            else if *v == b'}' {
                if let Some(s) = start.take() {
                    slices.push((s, idx));
                }
            }
        }

        // parse key value pairs
        for (start, end) in slices {
            let entitydata = &self.source[start..end];

            let mut map = HashMap::new();
            for (_, [propname, propval]) in KEY_VALUE.captures_iter(entitydata).map(|c| c.extract()) {
                map.insert(propname, propval);
            }

            f(map);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_blocks_in_order() {
        let defs = EntityDefs::new(r#"
{
"classname" "worldspawn"
"message" "test map"
}
{
"classname" "info_player_start"
"origin" "0 16 -32"
"turn_time_curve" "0 1 1 0.25"
}
"#);

        let mut classes = Vec::new();
        defs.parse(|ent| {
            classes.push(ent["classname"].to_owned());
            if ent["classname"] == "info_player_start" {
                assert_eq!(ent["origin"], "0 16 -32");
                assert_eq!(ent["turn_time_curve"], "0 1 1 0.25");
            }
        });

        assert_eq!(classes, vec!["worldspawn", "info_player_start"]);
    }

    #[test]
    fn test_unterminated_block_is_ignored() {
        let defs = EntityDefs::new("{ \"classname\" \"a\" } { \"classname\" \"b\"");
        let mut count = 0;
        defs.parse(|_| count += 1);
        assert_eq!(count, 1);
    }
}
