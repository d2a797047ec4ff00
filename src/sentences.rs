//! Built-in Italian/Dutch sentences featuring diminutives and augmentatives

use crate::dataset::{Record, Table};

/// (Italian, Dutch) sentence pairs appended when no other source is given
const SENTENCES: &[(&str, &str)] = &[
    ("Quel bambinello è molto curioso.", "Dat kleine jongetje is erg nieuwsgierig."),
    ("Abbiamo preso una stanzetta per il weekend.", "We hebben een kamertje voor het weekend genomen."),
    ("La fontanella del parco non funziona.", "Het fonteintje in het park werkt niet."),
    ("Questo cestino è pieno di frutta.", "Dit mandje zit vol fruit."),
    ("Ho letto un articoletto interessante.", "Ik heb een interessant artikeltje gelezen."),
    ("Il monticello è coperto di neve.", "Het heuveltje is bedekt met sneeuw."),
    ("Quel capannone è usato come magazzino.", "Die grote loods wordt als magazijn gebruikt."),
    ("Ho trovato un sassolino bianco sulla strada.", "Ik heb een wit steentje op de weg gevonden."),
    ("Il pesciolino nuota felice nell’acquario.", "Het visje zwemt vrolijk in het aquarium."),
    ("Quel fiorellino è così delicato.", "Dat bloemetje is zo fragiel."),
    ("La vecchietta racconta storie del passato.", "Het oude vrouwtje vertelt verhalen uit het verleden."),
    ("Quel giornalino è per bambini.", "Dat krantje is voor kinderen."),
    ("Il lettino è perfetto per il bambino.", "Het bedje is perfect voor de baby."),
];

/// Built-in sentences, as a table
pub fn builtin() -> Table {
    SENTENCES
        .iter()
        .map(|&(italian, dutch)| Record::new(italian, dutch))
        .collect()
}
