//! Associated Legendre functions of fractional degree and order

mod common;

use common::{assert_rel_close, dec};
use num_traits::{One, Zero};
use specfun::checked;
use specfun::error::Error;
use specfun::prelude::*;

// N[LegendreP[1/3, 1/7, 2, 789/1000], 1001]
const LEGENDRE_P_POSITIVE_ORDER: &str = "0.\
     9931591854934064572568089793337657296924109412673643417874724597677037521767383011114922218212896908\
     0027097864963936168565931417802571392659902755985572332367496479113814794086569608406498358078841079\
     6614332253952321909228583950735229742762075393962082193481956571473030793638066743365463314212686774\
     9705846436214183229248546560118160013959435929087793393518594318714950812356650788732887603501474515\
     6004025852431146299389135092485894348077166693965037523229349437595551471389905323765440198747406384\
     7110644718744990985775015222792213207021714039394865333620745229521299594761662471248344570118744500\
     7704200859337570117525726782130267734112267915875216713886079342015849430715707275265907079075801589\
     9475349854755219148506164974284035858053125225329876755631039303090095663330665771069643631805565017\
     9727332815465053842209475384208231035618687598506479237119775461739092129167925542731334863321783844\
     1556064262945029582348726229003376197479146725615623608519444682192209137686438989212000029759855669\
     1";

// N[LegendreP[1/3, -1/7, 2, 789/1000], 1001]
const LEGENDRE_P_NEGATIVE_ORDER: &str = "0.\
     8784603450982651787800193995179712668708811457628934597069677439917677235389487601183429873349313572\
     1740112239597751923750847879370888966990224706823959760139949980471385814793974033995303449488090611\
     4835091952533811596610218105241362688910341734149671735011558314729990018835764773704843032819536516\
     3427819614125862752426028897136351753538070819633813965759212017737617248661420825758620777154203107\
     8529752834189210596448426765785288762304216302213625296924365237041125679365420108990315253666959048\
     1435010679760671424858403744853181368320817779704621904906683182320616519700118110780346355100939602\
     3666343052640131368131413282079721988576944822856699190960381767814254150505256223829744577430684348\
     7615286073485757138919611235447550887660599440881376559989600453238727847889637748958394337404748335\
     8126213472100260218157672024002607566152107416082112148105488946036130500927944538748674420153147694\
     3387138845332690854023062463844788180014939062235033447136937086798813402498484392012262146506984403\
     9";

// N[LegendreQ[1/3, 1/7, 2, 789/1000], 1001]
const LEGENDRE_Q_POSITIVE_ORDER: &str = "0.\
     1802701358635473503357654947586116081212814896218637834466278197869512252395895222740695429982146035\
     6031050553694633844449903989916722532336371811084898600594152868857308967282179462211522993788162867\
     7937940705666514125775695969967978227378780279613276198008930643396707125474811188759254517278724120\
     7389289773410911722431603383521650557365445713405684637195534839239774206409352127340544908988632105\
     4776247480393326238840576035618210568727854433323584609583906187077896326821742487572480458213064013\
     1294415389805610364101254712548823884952831764415986558963073042187229383073285433144958849261339379\
     0888456281955232772521261719386944579027738990521656069899209895510911292249112861615412603542600625\
     5493560671059547162388837704126463700356368628825425175294509942750482619888824124287573395907950466\
     7777749042472348446167661381721631967592025204419250011417080752961739993679046744726634374246832558\
     5282958111218866577533906371773555762994157451873992840942126875958383079095536901373567200448533247\
     7";

// N[LegendreQ[1/3, -1/7, 2, 789/1000], 1001]
const LEGENDRE_Q_NEGATIVE_ORDER: &str = "0.\
     8725211798058021771020437712630274674510605544936385767210699251990220983760867392035886500465239358\
     5417166775183662657646854549585852386308610253338303575406726670063416304908174968679863283339896616\
     7716921817149455344218430163168276810110575001709890380061731701990040371701539625585858777374153674\
     6570275108580868300613942573513435764291683597723190662341537414213341532020483037211359461130834501\
     5136614688198495110325698727256447719344118750646683458729348535478679798432192166201638040012463513\
     4895321901853406483455973972927115251438009637396499519247428768545007861413787813604619784592425204\
     5279957452771829231458047192383541514732146863129614155264589649487716635801980297565852973957207341\
     6689032740571607241657154480359873886369995517919732624947780435224341886972623320429349142534543787\
     2520819207390651864811028584879681945619590803413012623251077541425238440151370427449131127112546451\
     4843629210732552523268500297159323480073985043542756370904205258560162593093044761251062956759800893\
     5";

type D = Dec<1001>;

fn degree_and_argument() -> (D, D) {
    (D::from_ratio(1, 3), D::from_ratio(789, 1000))
}

#[test]
fn test_legendre_p_positive_fractional_order() {
    let (v, x) = degree_and_argument();
    let u = D::from_ratio(1, 7);
    let value = legendre_p(&v, &u, &x).unwrap();
    let tol = D::epsilon() * 1_000_000u32;
    assert_rel_close(&value, &dec::<D>(LEGENDRE_P_POSITIVE_ORDER), &tol, "P(1/3, 1/7)");
}

#[test]
fn test_legendre_p_negative_fractional_order() {
    let (v, x) = degree_and_argument();
    let u = D::from_ratio(-1, 7);
    let value = legendre_p(&v, &u, &x).unwrap();
    let tol = D::epsilon() * 1_000_000u32;
    assert_rel_close(&value, &dec::<D>(LEGENDRE_P_NEGATIVE_ORDER), &tol, "P(1/3, -1/7)");
}

#[test]
fn test_legendre_q_positive_fractional_order() {
    let (v, x) = degree_and_argument();
    let u = D::from_ratio(1, 7);
    let value = legendre_q(&v, &u, &x).unwrap();
    let tol = D::epsilon() * 1_000_000u32;
    assert_rel_close(&value, &dec::<D>(LEGENDRE_Q_POSITIVE_ORDER), &tol, "Q(1/3, 1/7)");
}

#[test]
fn test_legendre_q_negative_fractional_order() {
    let (v, x) = degree_and_argument();
    let u = D::from_ratio(-1, 7);
    let value = legendre_q(&v, &u, &x).unwrap();
    let tol = D::epsilon() * 1_000_000u32;
    assert_rel_close(&value, &dec::<D>(LEGENDRE_Q_NEGATIVE_ORDER), &tol, "Q(1/3, -1/7)");
}

#[test]
fn test_legendre_p_reduces_to_polynomial() {
    // P_3(x) = (5x^3 - 3x)/2, so P_3(2/5) = -11/25.
    type Narrow = Dec<100>;
    let value = legendre_p(
        &Narrow::from_u32(3),
        &Narrow::zero(),
        &Narrow::from_ratio(2, 5),
    )
    .unwrap();
    let tol = Narrow::epsilon() * 10u32;
    assert_rel_close(&value, &Narrow::from_ratio(-11, 25), &tol, "P_3(2/5)");
}

#[test]
fn test_legendre_q_rejects_integer_order() {
    type Narrow = Dec<50>;
    let v = Narrow::from_ratio(1, 3);
    let x = Narrow::from_ratio(789, 1000);
    for u in [Narrow::zero(), Narrow::from_u32(2), Narrow::from_i32(-1)] {
        let err = legendre_q(&v, &u, &x).unwrap_err();
        assert!(
            matches!(err, Error::NearIntegerOrder { func: "legendre_q" }),
            "got {err}"
        );
    }
}

#[test]
fn test_legendre_q_rejects_order_too_close_to_integer() {
    type Narrow = Dec<50>;
    let v = Narrow::from_ratio(1, 3);
    let x = Narrow::from_ratio(789, 1000);

    let barely_off = Narrow::from_u32(2) + Narrow::from_u32(10).powi(-40);
    let err = legendre_q(&v, &barely_off, &x).unwrap_err();
    assert!(matches!(err, Error::NearIntegerOrder { func: "legendre_q" }), "got {err}");

    let clearly_off = Narrow::from_ratio(2001, 1000);
    assert!(legendre_q(&v, &clearly_off, &x).is_ok());
}

#[test]
fn test_checked_rejects_arguments_outside_unit_interval() {
    type Narrow = Dec<30>;
    let v = Narrow::from_ratio(1, 3);
    let u = Narrow::from_ratio(1, 7);
    for x in [Narrow::one(), Narrow::from_i32(-2), Narrow::from_ratio(3, 2)] {
        let p_err = checked::legendre_p(&v, &u, &x).unwrap_err();
        assert!(matches!(p_err, Error::Domain { func: "legendre_p", .. }), "got {p_err}");
        let q_err = checked::legendre_q(&v, &u, &x).unwrap_err();
        assert!(matches!(q_err, Error::Domain { func: "legendre_q", .. }), "got {q_err}");
    }
}

#[test]
fn test_checked_accepts_interior_argument() {
    type Narrow = Dec<30>;
    let v = Narrow::from_ratio(1, 3);
    let u = Narrow::from_ratio(1, 7);
    let x = Narrow::from_ratio(-1, 2);
    let direct = legendre_p(&v, &u, &x).unwrap();
    let validated = checked::legendre_p(&v, &u, &x).unwrap();
    assert_eq!(direct, validated);
}
