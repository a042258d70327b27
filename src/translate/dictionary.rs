//! French → English lexicon for household item descriptions.
//!
//! Keys are stored already normalized (lower-case, no diacritics) so lookups
//! can use the token produced by [`super::normalize`] directly. An empty value
//! marks a function word that is dropped from the output.
//!
//! **Update process**: when a common item keeps producing poor search results,
//! add the missing word here and extend the tests in `translate/mod.rs`.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Lookup table built once from [`ENTRIES`].
pub static LEXICON: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Raw lexicon entries, grouped by domain.
pub static ENTRIES: &[(&str, &str)] = &[
    // Function words (articles, prepositions, conjunctions)
    ("le", ""),
    ("la", ""),
    ("les", ""),
    ("l", ""),
    ("un", ""),
    ("une", ""),
    ("des", ""),
    ("du", ""),
    ("de", ""),
    ("d", ""),
    ("a", ""),
    ("au", ""),
    ("aux", ""),
    ("en", ""),
    ("et", ""),
    ("ou", ""),
    ("pour", ""),
    ("avec", ""),
    ("sans", ""),
    ("sur", ""),
    ("sous", ""),
    ("dans", ""),
    ("par", ""),
    ("chez", ""),
    ("entre", ""),
    ("vers", ""),
    // Furniture
    ("canape", "sofa"),
    ("sofa", "sofa"),
    ("fauteuil", "armchair"),
    ("chaise", "chair"),
    ("chaises", "chairs"),
    ("tabouret", "stool"),
    ("banc", "bench"),
    ("table", "table"),
    ("tables", "tables"),
    ("bureau", "desk"),
    ("lit", "bed"),
    ("matelas", "mattress"),
    ("sommier", "box spring"),
    ("armoire", "wardrobe"),
    ("commode", "dresser"),
    ("etagere", "shelf"),
    ("etageres", "shelves"),
    ("bibliotheque", "bookcase"),
    ("buffet", "sideboard"),
    ("vaisselier", "hutch"),
    ("meuble", "furniture"),
    ("meubles", "furniture"),
    ("mobilier", "furniture"),
    ("chevet", "nightstand"),
    ("berceau", "crib"),
    ("pouf", "ottoman"),
    ("divan", "couch"),
    ("causeuse", "loveseat"),
    ("vitrine", "display cabinet"),
    ("placard", "cupboard"),
    ("penderie", "closet"),
    ("tiroir", "drawer"),
    ("tiroirs", "drawers"),
    ("basse", "coffee"),
    ("salle", "room"),
    ("manger", "dining"),
    ("chambre", "bedroom"),
    ("salon", "living room"),
    ("cuisine", "kitchen"),
    ("jardin", "garden"),
    ("enfant", "kids"),
    ("enfants", "kids"),
    ("bebe", "baby"),
    ("coiffeuse", "vanity"),
    ("secretaire", "secretary desk"),
    ("console", "console"),
    ("hamac", "hammock"),
    // Electronics and computing
    ("televiseur", "television"),
    ("television", "television"),
    ("tele", "tv"),
    ("ecran", "monitor"),
    ("ordinateur", "computer"),
    ("portable", "laptop"),
    ("tablette", "tablet"),
    ("telephone", "phone"),
    ("cellulaire", "cell phone"),
    ("intelligent", "smart"),
    ("clavier", "keyboard"),
    ("souris", "mouse"),
    ("imprimante", "printer"),
    ("numeriseur", "scanner"),
    ("enceinte", "speaker"),
    ("haut", "high"),
    ("parleur", "speaker"),
    ("casque", "headphones"),
    ("ecouteurs", "earbuds"),
    ("chaine", "stereo"),
    ("lecteur", "player"),
    ("appareil", "camera"),
    ("photo", "photo"),
    ("camera", "camera"),
    ("camescope", "camcorder"),
    ("objectif", "lens"),
    ("projecteur", "projector"),
    ("routeur", "router"),
    ("modem", "modem"),
    ("disque", "drive"),
    ("dur", "hard"),
    ("memoire", "memory"),
    ("cle", "key"),
    ("chargeur", "charger"),
    ("batterie", "battery"),
    ("cable", "cable"),
    ("manette", "controller"),
    ("jeu", "game"),
    ("jeux", "games"),
    ("video", "video"),
    ("montre", "watch"),
    ("connectee", "smart"),
    ("liseuse", "e-reader"),
    ("drone", "drone"),
    ("amplificateur", "amplifier"),
    ("recepteur", "receiver"),
    ("platine", "turntable"),
    ("vinyle", "vinyl"),
    ("radio", "radio"),
    ("reveil", "alarm clock"),
    ("electronique", "electronics"),
    ("informatique", "computer"),
    ("fil", "wire"),
    ("numerique", "digital"),
    // Appliances
    ("refrigerateur", "refrigerator"),
    ("frigo", "fridge"),
    ("congelateur", "freezer"),
    ("four", "oven"),
    ("micro", "micro"),
    ("ondes", "wave"),
    ("cuisiniere", "stove"),
    ("plaque", "cooktop"),
    ("hotte", "range hood"),
    ("lave", "washer"),
    ("vaisselle", "dishes"),
    ("laveuse", "washing machine"),
    ("secheuse", "dryer"),
    ("linge", "laundry"),
    ("aspirateur", "vacuum"),
    ("robot", "robot"),
    ("climatiseur", "air conditioner"),
    ("ventilateur", "fan"),
    ("chauffage", "heater"),
    ("radiateur", "radiator"),
    ("deshumidificateur", "dehumidifier"),
    ("humidificateur", "humidifier"),
    ("purificateur", "purifier"),
    ("air", "air"),
    ("grille", "toaster"),
    ("pain", "bread"),
    ("bouilloire", "kettle"),
    ("cafetiere", "coffee maker"),
    ("cafe", "coffee"),
    ("machine", "machine"),
    ("expresso", "espresso"),
    ("mixeur", "blender"),
    ("melangeur", "blender"),
    ("batteur", "mixer"),
    ("friteuse", "fryer"),
    ("mijoteuse", "slow cooker"),
    ("autocuiseur", "pressure cooker"),
    ("fer", "iron"),
    ("repasser", "ironing"),
    ("seche", "dryer"),
    ("cheveux", "hair"),
    ("rasoir", "razor"),
    ("electrique", "electric"),
    ("electromenager", "appliance"),
    ("appareils", "appliances"),
    ("balance", "scale"),
    ("gaufrier", "waffle maker"),
    ("centrifugeuse", "juicer"),
    ("extracteur", "extractor"),
    ("jus", "juice"),
    // Kitchenware and tableware
    ("casserole", "saucepan"),
    ("poele", "frying pan"),
    ("marmite", "stock pot"),
    ("couteau", "knife"),
    ("couteaux", "knives"),
    ("fourchette", "fork"),
    ("cuillere", "spoon"),
    ("couverts", "cutlery"),
    ("assiette", "plate"),
    ("assiettes", "plates"),
    ("bol", "bowl"),
    ("verre", "glass"),
    ("verres", "glasses"),
    ("tasse", "cup"),
    ("tasses", "cups"),
    ("plat", "dish"),
    ("planche", "board"),
    ("decouper", "cutting"),
    ("ustensiles", "utensils"),
    ("theiere", "teapot"),
    ("carafe", "carafe"),
    ("moule", "mold"),
    ("passoire", "colander"),
    ("rape", "grater"),
    ("ouvre", "opener"),
    ("boite", "box"),
    ("bouteille", "bottle"),
    ("vin", "wine"),
    ("cave", "cellar"),
    ("service", "set"),
    // Decor, lighting, textiles
    ("lampe", "lamp"),
    ("lampadaire", "floor lamp"),
    ("lustre", "chandelier"),
    ("luminaire", "light fixture"),
    ("applique", "wall light"),
    ("ampoule", "bulb"),
    ("miroir", "mirror"),
    ("tableau", "painting"),
    ("cadre", "frame"),
    ("peinture", "painting"),
    ("affiche", "poster"),
    ("sculpture", "sculpture"),
    ("statue", "statue"),
    ("vase", "vase"),
    ("horloge", "clock"),
    ("pendule", "clock"),
    ("bougie", "candle"),
    ("chandelier", "candlestick"),
    ("tapis", "rug"),
    ("moquette", "carpet"),
    ("rideau", "curtain"),
    ("rideaux", "curtains"),
    ("store", "blind"),
    ("coussin", "cushion"),
    ("coussins", "cushions"),
    ("oreiller", "pillow"),
    ("couette", "duvet"),
    ("couverture", "blanket"),
    ("plaid", "throw"),
    ("drap", "sheet"),
    ("draps", "sheets"),
    ("housse", "cover"),
    ("nappe", "tablecloth"),
    ("serviette", "towel"),
    ("serviettes", "towels"),
    ("decoration", "decor"),
    ("art", "art"),
    ("oeuvre", "artwork"),
    ("plante", "plant"),
    ("pot", "pot"),
    ("jardiniere", "planter"),
    // Clothing, jewelry, accessories
    ("vetement", "clothing"),
    ("vetements", "clothing"),
    ("manteau", "coat"),
    ("veste", "jacket"),
    ("blouson", "jacket"),
    ("chemise", "shirt"),
    ("pantalon", "pants"),
    ("robe", "dress"),
    ("jupe", "skirt"),
    ("chaussures", "shoes"),
    ("bottes", "boots"),
    ("sac", "bag"),
    ("main", "hand"),
    ("dos", "back"),
    ("valise", "suitcase"),
    ("ceinture", "belt"),
    ("lunettes", "glasses"),
    ("soleil", "sun"),
    ("bijou", "jewelry"),
    ("bijoux", "jewelry"),
    ("bague", "ring"),
    ("collier", "necklace"),
    ("bracelet", "bracelet"),
    ("boucles", "earrings"),
    ("oreilles", "ears"),
    ("fourrure", "fur"),
    // Sports, outdoor, tools
    ("velo", "bike"),
    ("bicyclette", "bicycle"),
    ("trottinette", "scooter"),
    ("ski", "ski"),
    ("skis", "skis"),
    ("raquette", "racket"),
    ("raquettes", "snowshoes"),
    ("patins", "skates"),
    ("tente", "tent"),
    ("kayak", "kayak"),
    ("canot", "canoe"),
    ("barbecue", "barbecue"),
    ("tondeuse", "lawn mower"),
    ("gazon", "lawn"),
    ("souffleuse", "snow blower"),
    ("neige", "snow"),
    ("poids", "weights"),
    ("halteres", "dumbbells"),
    ("exercice", "exercise"),
    ("sport", "sport"),
    ("sports", "sports"),
    ("outil", "tool"),
    ("outils", "tools"),
    ("perceuse", "drill"),
    ("visseuse", "screwdriver"),
    ("scie", "saw"),
    ("marteau", "hammer"),
    ("tournevis", "screwdriver"),
    ("echelle", "ladder"),
    ("etabli", "workbench"),
    ("compresseur", "compressor"),
    ("generatrice", "generator"),
    ("nettoyeur", "cleaner"),
    ("pression", "pressure"),
    ("brouette", "wheelbarrow"),
    ("parasol", "patio umbrella"),
    ("exterieur", "outdoor"),
    ("terrasse", "patio"),
    ("piscine", "pool"),
    // Musical instruments
    ("piano", "piano"),
    ("guitare", "guitar"),
    ("violon", "violin"),
    ("violoncelle", "cello"),
    ("tambour", "drum"),
    ("flute", "flute"),
    ("trompette", "trumpet"),
    ("saxophone", "saxophone"),
    ("clarinette", "clarinet"),
    ("harpe", "harp"),
    ("synthetiseur", "synthesizer"),
    ("accordeon", "accordion"),
    ("instrument", "instrument"),
    ("instruments", "instruments"),
    ("musique", "music"),
    ("acoustique", "acoustic"),
    // Books, toys, misc categories
    ("livre", "book"),
    ("livres", "books"),
    ("jouet", "toy"),
    ("jouets", "toys"),
    ("poussette", "stroller"),
    ("siege", "seat"),
    ("auto", "car"),
    ("collection", "collectible"),
    ("autre", "other"),
    ("divers", "miscellaneous"),
    // Materials, colors, descriptors
    ("bois", "wood"),
    ("massif", "solid"),
    ("chene", "oak"),
    ("pin", "pine"),
    ("erable", "maple"),
    ("noyer", "walnut"),
    ("metal", "metal"),
    ("acier", "steel"),
    ("inoxydable", "stainless"),
    ("inox", "stainless steel"),
    ("aluminium", "aluminum"),
    ("cuivre", "copper"),
    ("laiton", "brass"),
    ("or", "gold"),
    ("argent", "silver"),
    ("cristal", "crystal"),
    ("porcelaine", "porcelain"),
    ("ceramique", "ceramic"),
    ("marbre", "marble"),
    ("pierre", "stone"),
    ("plastique", "plastic"),
    ("cuir", "leather"),
    ("tissu", "fabric"),
    ("coton", "cotton"),
    ("laine", "wool"),
    ("soie", "silk"),
    ("lin", "linen"),
    ("velours", "velvet"),
    ("osier", "wicker"),
    ("rotin", "rattan"),
    ("noir", "black"),
    ("noire", "black"),
    ("blanc", "white"),
    ("blanche", "white"),
    ("gris", "gray"),
    ("grise", "gray"),
    ("rouge", "red"),
    ("bleu", "blue"),
    ("bleue", "blue"),
    ("vert", "green"),
    ("verte", "green"),
    ("jaune", "yellow"),
    ("marron", "brown"),
    ("brun", "brown"),
    ("brune", "brown"),
    ("beige", "beige"),
    ("rose", "pink"),
    ("violet", "purple"),
    ("orange", "orange"),
    ("dore", "gold"),
    ("doree", "gold"),
    ("argente", "silver"),
    ("grand", "large"),
    ("grande", "large"),
    ("petit", "small"),
    ("petite", "small"),
    ("moyen", "medium"),
    ("moyenne", "medium"),
    ("nouveau", "new"),
    ("neuf", "new"),
    ("neuve", "new"),
    ("ancien", "antique"),
    ("ancienne", "antique"),
    ("vintage", "vintage"),
    ("moderne", "modern"),
    ("rond", "round"),
    ("ronde", "round"),
    ("carre", "square"),
    ("carree", "square"),
    ("rectangulaire", "rectangular"),
    ("pliant", "folding"),
    ("pliante", "folding"),
    ("reglable", "adjustable"),
    ("double", "double"),
    ("simple", "single"),
    ("places", "seater"),
    ("place", "seater"),
    ("pouces", "inch"),
    ("pouce", "inch"),
    ("ensemble", "set"),
    ("paire", "pair"),
    ("lot", "set"),
    ("mural", "wall"),
    ("murale", "wall"),
    ("portatif", "portable"),
    ("bluetooth", "bluetooth"),
];
