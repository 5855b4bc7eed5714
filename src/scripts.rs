use hex_literal::hex;

use crate::PolicyScript;

/// This is the serialized minting policy of the Seabug NFT protocol. It is
/// attached to mint and burn transactions as a script witness and must be
/// preserved byte for byte.
pub const NFT_MINTING_POLICY: [u8; 4963] = hex!(
    "
    5913600100003333333232333222323232323322323322323233223232323332
    2233322233322233223233322232323232332232333332222232323333333322
    2222223333222233223322332233223322332233223322323232323232323232
    3232323232323333322222332222222223232323232232325335306f33223232
    323232323235302f353019008220022222222222323333530580142533530840
    15335308401333530641200122353550430022235355045003225335308a0133
    07b00400213307a003001108b013350663355042306100133702102029001283
    3a99a9a83598078011080089931a983d99ab9c49010b756e726561636861626c
    650007c07a1086011335738921124e4654206d757374206265206275726e6564
    00085011533530840153353084013303a501135307e001222001108601133573
    89211f4f776e6572206d757374207369676e20746865207472616e7361637469
    6f6e000850115335308401333553058120013505e50762533530850153353085
    01330693530400012220033306b3073024506d1086011087011333573466e1cc
    cc0e8d4c100004888008094d4c1fc00888800d2002087010860110860135303b
    50112222222222009108601133573892011f556e6465726c79696e67204e4654
    206d75737420626520756e6c6f636b6564000850110850110850123232323232
    25335308a015335308a0133301300735308401007222002001108c0113357389
    213e45786163746c79206f6e65206e657720746f6b656e206d75737420626520
    6d696e74656420616e642065786163746c79206f6e65206f6c64206275726e74
    0008b0115335308a015335308a01330055003330703078026507215335308a01
    3300550023307030790285072133355305e1200135064507c330063307030793
    530840100722200150723370266e054010c224054008c22405400d4058422c04
    422c044230044cd5ce248113526f79616c6974696573206e6f74207061696400
    08b01108b0113370666e09400809520a09c0113370666e09400408920a09c011
    35308001003222002225335308701333573466e2000822804224042200442240
    44ccd54c16c48004d418541e4cc00c004009404c888d4c1080048894cd4c2280
    4cc1b801800c54cd4c22804ccd5cd19b8700533303f00206806808c0108b0115
    335350715335350710012132353043001222222222253353507d33355306a120
    015069235355054001225335309901333573466e3c00803c26c04268044d4208
    0400c542040400884d420004d4d5415000488004541f94060541c884c8ccd5cd
    19baf00200108e0108d013235355049001223374a900019aba0375200466ae80
    dd48009bb1084013355049501a3068008108b01108b01108b012253353085015
    33530850133300e00200135307f00222200110870113357389213e4578616374
    6c79206f6e65206e657720746f6b656e206d757374206265206d696e74656420
    616e642065786163746c79206f6e65206f6c64206275726e7400086011533530
    85013303b501235307f00222200110870113357389211f4f776e6572206d7573
    74207369676e20746865207472616e73616374696f6e00086011086012533530
    8401533530840153353506553353506b301200221001132635307b3357389201
    0b756e726561636861626c650007c07a10850122135355043002225335350690
    0315335308801333573466e3c008c19401422804224044ccd5cd19b870014800
    8228042240442240488422c044218044cd5ce2491e45786163746c79206f6e65
    204e4654206d757374206265206d696e74656400085011533530840133355305
    8120013505e507625335308501330693530400012220033306b3073024506d13
    33573466e1cccc0e8d4c100004888008094d4c1fc00888800d20020870108601
    10860135303b50112222222222009108601133573892011d556e6465726c7969
    6e67204e4654206d757374206265206c6f636b65640008501108501353039500
    f222222222200723222325335350635335350633006353033500922222222220
    072135066001150642153353505e001107e2213535503c002225335350620031
    0820122135355040002225335350660031533530850153353085013307600650
    0d133076002500a10860115335308501333573466e1c01520010870108601133
    3573466e1c005200208701086011086011533530850153353085013307600250
    0d133076006500a10860115335308501333573466e1c00520010870108601133
    3573466e1c0152002087010860110860110860122108801107d1305835307500
    4222333079003005004130550013200135507a22533535059001150602213535
    5037002225335307c3306d002500b13506500113006003320013550792253353
    50580011505f22135355036002225335307b3306c002500a1350640011300600
    3135302b50012222222222009135301400322002320013550762253353505500
    11505c2213535503300222533530783306900250071350610011300600313530
    1200122333353016001232635306b335738921024c680006c06a200123263530
    6b3357389201024c680006c06a232635306b3357389201024c680006c06a3333
    573466e1d40112000230463065500623333573466e1d401520062304a3066500
    723333573466e1d4019200223304930675008306e500923333573466e1d401d2
    00423304b30685009375ca014464c6a60d466ae701b01ac1a41a019c198194cc
    cd5cd19b8735573aa004900011980919191919191919191919191999ab9a3370
    e6aae754029200023333333333034335024232323333573466e1cd55cea80124
    000466074605a6ae854008c0a4d5d09aba2500223263530773357380f20f00ec
    0ea26aae7940044dd50009aba1500a33502402535742a012666aa04eeb94098d
    5d0a804199aa813bae502635742a00e66a04805a6ae854018cd4090cd540c00b
    9d69aba150053232323333573466e1cd55cea80124000466a0846464646666ae
    68cdc39aab9d5002480008cd4128cd40cdd69aba150023034357426ae8940088
    c98d4c1eccd5ce03e83e03d03c89aab9e5001137540026ae854008c8c8c8cccd
    5cd19b8735573aa0049000119a82419a819bad35742a00460686ae84d5d12801
    11931a983d99ab9c07d07c07a079135573ca00226ea8004d5d09aba250022326
    3530773357380f20f00ec0ea26aae7940044dd50009aba1500433502475c6ae8
    5400ccd4090cd540c1d710009aba15002302a357426ae8940088c98d4c1cccd5
    ce03a83a03903889aba25001135744a00226ae8940044d5d1280089aba250011
    35744a00226ae8940044d5d1280089aab9e5001137540026ae854008c8c8c8cc
    cd5cd19b875001480188c06cc094d5d09aab9e500323333573466e1d40092004
    2301a3027357426aae7940108cccd5cd19b875003480088c068c08cd5d09aab9
    e500523333573466e1d401120002301d375c6ae84d55cf280311931a983719ab
    9c07006f06d06c06b06a069135573aa00226ea8004d5d09aba25002232635306
    73357380d20d00cc0ca20ce264c6a60cc66ae712410350543500067065135573
    ca00226ea80044d55cea80209aba150021357426ae8940044d55cf280089baa0
    0122123300100300220012122223004005212222300300521222230020052122
    22300100520011232230023758002640026aa0ba446666aae7c004940fc8cd40
    f8c010d5d080118019aba200205323232323333573466e1cd55cea801a400046
    660306464646666ae68cdc39aab9d5002480008cc118c04cd5d0a80119a80600
    91aba135744a004464c6a60ae66ae701641601581544d55cf280089baa001357
    42a006666aa00eeb94018d5d0a80119a8043ae357426ae8940088c98d4c14ccd
    5ce02a82a02902889aba25001135573ca00226ea80044cd54005d73ad1122322
    30023756002640026aa0b644646666aae7c008940f88cd40f4cd54064c018d55
    cea80118029aab9e50023004357440060a426ae84004488c8c8cccd5cd19b875
    001480008d4108c014d5d09aab9e500323333573466e1d400920022504223263
    530513357380a60a40a009e09c26aae7540044dd5000919191999ab9a3370e6a
    ae7540092000233017300535742a0046eb4d5d09aba25002232635304e335738
    0a009e09a09826aae7940044dd50009191999ab9a3370e6aae75400520002375
    c6ae84d55cf280111931a982619ab9c04e04d04b04a1375400224464646666ae
    68cdc3a800a40084a03c46666ae68cdc3a8012400446a042600c6ae84d55cf28
    0211999ab9a3370ea00690001281091931a982799ab9c05105004e04d04c04b1
    35573aa00226ea80048c8cccd5cd19b8750014800881548cccd5cd19b8750024
    800081548c98d4c12ccd5ce02682602502482409aab9d3754002464646464646
    666ae68cdc3a800a4018404846666ae68cdc3a80124014404c46666ae68cdc3a
    801a40104660486eb8d5d0a8029bad357426ae8940148cccd5cd19b875004480
    188cc098dd71aba15007375c6ae84d5d1280391999ab9a3370ea00a900211981
    598061aba15009375c6ae84d5d1280491999ab9a3370ea00c90011181698069a
    ba135573ca01646666ae68cdc3a803a400046058601c6ae84d55cf280611931a
    982999ab9c05505405205105004f04e04d04c04b135573aa00826aae79400c4d
    55cf280109aab9e5001137540024646464646666ae68cdc3a800a4004466607e
    6eb4d5d0a8021bad35742a0066eb4d5d09aba2500323333573466e1d40092000
    230413008357426aae7940188c98d4c130cd5ce02702682582502489aab9d500
    3135744a00226aae7940044dd5000919191999ab9a3370ea00290011181f9bae
    357426aae79400c8cccd5cd19b875002480008c104dd71aba135573ca008464c
    6a609266ae7012c12812011c1184d55cea80089baa0011122232323333573466
    e1cd55cea80124000466aa020600c6ae854008c014d5d09aba25002232635304
    933573809609409008e26aae7940044dd500091119191800802990009aa82991
    19a9a819000a4000446a6aa02000444a66a60aa666ae68cdc780100482b82b09
    80380089803001990009aa8291119a9a818800a4000446a6aa01e00444a66a60
    a8666ae68cdc780100382b02a880089803001911a98018011111111111299a9a
    81e999aa981509000a8149299a982b999ab9a3371e0180020b20b026a0800022
    a07e006420b220ae444444444424666666666600201601401201000e00c00a00
    8006004400244246600200600440024442466600200800600440022244246600
    2006004224002442466002006004400224424660020060042400224424660020
    0600424002244246600200600424002242444600600822444004224440022400
    2424444444600e01044244444446600c012010424444444600a0102444444400
    8244444440064424444444660040120104424444444660020120104002266a01
    244a66a6a02c004420062002a02a640026aa0604422444a66a6a02400226a6a0
    1800644002442666a6a01c00a440046008004666aa600e2400200a0080024244
    44600800a44244446600600c00a44244446600400c00a424444600200a400224
    66a00644666a6a038006440040040026a6a03400244002244246600200600424
    00246e50ccd54c00c48005c5001199119801191b943302500100535302000322
    20023300237286a6040006444002660046e50d4c08000c88800c0054019401d2
    2100320013550252211222533535007001100222133005002333553007120010
    0500400132001355024221222533535006002153353500600110272210282215
    335350080031028221533530293300700400213335300912001007003001102a
    1122002122122330010040031200122353003002223530050032232335301000
    523353011004253353025333573466e3c00800409c0985400c409880988cd4c0
    44010809894cd4c094ccd5cd19b8f00200102702615003102615335350090032
    153353500a00221335300e0022335300f0022335301300223353014002233019
    0020012029233530140022029233019002001222029222335301100420292225
    335302a333573466e1c01800c0b00ac54cd4c0a8ccd5cd19b8700500202c02b1
    3301a004001102b102b102415335350090012102410242212330010030022001
    1212230020031122001120012122300200322212233300100500400320012122
    300200321223001003200122333573466e1c00800405004c88ccd5cd19b8f002
    001013012133500222533530100021012100100f122123300100300212001232
    32323333573466e1cd55cea801a400046660166eb8d5d0a80198061aba150023
    75c6ae84d5d1280111931a980399ab9c009008006005135744a00226aae79400
    44dd5000a4c24002400292010350543100222123330010040030022001232533
    53006333573466e21400400c02001c58540044dd6800a4000640026aa00c444a
    66a600a666ae68cdc4001241000800e00c266e2c0080044cc00ccdc180124100
    0866e2ccdc300124100080024a66a6004666ae68cdc40008028020018a400020
    0224400424400240029040497a0088919180080091198019801001000a451ccf
    0c1cbf47537f238f756fc1be191abf76009e1988910092184c4b7f0048811c6c
    1039b6973bb0e7ad42de5b16a691ede3e0265cd58caf070ff15ef30048811c3f
    3464650beb5324d0e463ebe81fbe1fd519b6438521e96d0d35bd7500483403d2
    211c9da8fa76a2a0f52aa5df10fb7b81f9afe4b20e9068b3f95fadc7477a0048
    3a01c1
    "
);

/// Returns the Seabug NFT minting policy as an opaque script.
pub const fn nft_minting_policy() -> PolicyScript {
    PolicyScript::new(&NFT_MINTING_POLICY)
}

#[cfg(test)]
mod tests {
    use super::*;

    use sha2::{Digest, Sha256};

    #[test]
    fn identical_across_calls() {
        assert_eq!(
            nft_minting_policy().as_bytes(),
            nft_minting_policy().as_bytes()
        );
        assert_eq!(nft_minting_policy().to_hex(), nft_minting_policy().to_hex());
    }

    #[test]
    fn hex_shape() {
        let hex = nft_minting_policy().to_hex();
        assert_eq!(hex.len(), 9926);
        assert_eq!(hex.len() % 2, 0);
        assert!(hex
            .bytes()
            .all(|c| matches!(c, b'0'..=b'9' | b'a'..=b'f')));
    }

    #[test]
    fn hex_round_trip() {
        let script = nft_minting_policy();
        let bytes = hex::decode(script.to_hex()).unwrap();
        assert_eq!(bytes, script.as_bytes());
        assert_eq!(hex::encode(bytes), script.to_hex());
    }

    #[test]
    fn script_bytes() {
        let script = nft_minting_policy();
        assert_eq!(script.len(), 4963);

        let encoded = script.to_hex();
        assert!(encoded.starts_with("5913600100003333333232333222"));
        assert!(encoded.ends_with("483a01c1"));

        let digest = Sha256::digest(script.as_bytes());
        assert_eq!(
            hex::encode(digest),
            "62daf8e8886445675ddb4042f770e551547a593fd99554435d4461652255c9df"
        );
    }
}
