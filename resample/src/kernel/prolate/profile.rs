// Empirical prolate spheroidal profile over the reference radius, peak at
// sample 0, decaying to zero at the last sample. Opaque data.

pub(super) const PROFILE_SIZE: usize = 721;

#[rustfmt::skip]
pub(super) static PROFILE: [f64; PROFILE_SIZE] = [
    1.0000000000, 0.9999941807, 0.9999767231, 0.9999476276, 0.9999068951, 0.9998545268,
    0.9997905242, 0.9997148892, 0.9996276240, 0.9995287313, 0.9994182138, 0.9992960748,
    0.9991623179, 0.9990169471, 0.9988599665, 0.9986913809, 0.9985111950, 0.9983194144,
    0.9981160444, 0.9979010912, 0.9976745609, 0.9974364603, 0.9971867964, 0.9969255764,
    0.9966528079, 0.9963684991, 0.9960726582, 0.9957652939, 0.9954464151, 0.9951160313,
    0.9947741522, 0.9944207876, 0.9940559480, 0.9936796440, 0.9932918867, 0.9928926874,
    0.9924820577, 0.9920600098, 0.9916265560, 0.9911817088, 0.9907254814, 0.9902578871,
    0.9897789395, 0.9892886527, 0.9887870409, 0.9882741189, 0.9877499016, 0.9872144043,
    0.9866676427, 0.9861096327, 0.9855403906, 0.9849599331, 0.9843682770, 0.9837654397,
    0.9831514387, 0.9825262919, 0.9818900175, 0.9812426341, 0.9805841606, 0.9799146161,
    0.9792340202, 0.9785423926, 0.9778397535, 0.9771261233, 0.9764015228, 0.9756659731,
    0.9749194956, 0.9741621120, 0.9733938442, 0.9726147146, 0.9718247459, 0.9710239609,
    0.9702123830, 0.9693900357, 0.9685569427, 0.9677131284, 0.9668586172, 0.9659934337,
    0.9651176032, 0.9642311509, 0.9633341026, 0.9624264842, 0.9615083219, 0.9605796424,
    0.9596404725, 0.9586908392, 0.9577307702, 0.9567602930, 0.9557794358, 0.9547882268,
    0.9537866947, 0.9527748682, 0.9517527767, 0.9507204495, 0.9496779163, 0.9486252073,
    0.9475623527, 0.9464893831, 0.9454063293, 0.9443132225, 0.9432100941, 0.9420969758,
    0.9409738995, 0.9398408974, 0.9386980022, 0.9375452464, 0.9363826633, 0.9352102860,
    0.9340281482, 0.9328362837, 0.9316347265, 0.9304235110, 0.9292026719, 0.9279722441,
    0.9267322625, 0.9254827627, 0.9242237803, 0.9229553511, 0.9216775113, 0.9203902973,
    0.9190937457, 0.9177878934, 0.9164727776, 0.9151484356, 0.9138149050, 0.9124722236,
    0.9111204297, 0.9097595614, 0.9083896574, 0.9070107564, 0.9056228976, 0.9042261200,
    0.9028204634, 0.9014059673, 0.8999826717, 0.8985506167, 0.8971098428, 0.8956603907,
    0.8942023010, 0.8927356148, 0.8912603735, 0.8897766185, 0.8882843915, 0.8867837343,
    0.8852746892, 0.8837572984, 0.8822316045, 0.8806976501, 0.8791554782, 0.8776051320,
    0.8760466548, 0.8744800901, 0.8729054816, 0.8713228733, 0.8697323092, 0.8681338337,
    0.8665274912, 0.8649133265, 0.8632913843, 0.8616617098, 0.8600243482, 0.8583793447,
    0.8567267452, 0.8550665952, 0.8533989407, 0.8517238279, 0.8500413029, 0.8483514123,
    0.8466542027, 0.8449497207, 0.8432380134, 0.8415191279, 0.8397931113, 0.8380600112,
    0.8363198750, 0.8345727506, 0.8328186857, 0.8310577284, 0.8292899269, 0.8275153294,
    0.8257339845, 0.8239459406, 0.8221512467, 0.8203499515, 0.8185421041, 0.8167277535,
    0.8149069492, 0.8130797405, 0.8112461768, 0.8094063080, 0.8075601838, 0.8057078541,
    0.8038493689, 0.8019847783, 0.8001141328, 0.7982374825, 0.7963548781, 0.7944663700,
    0.7925720092, 0.7906718462, 0.7887659322, 0.7868543181, 0.7849370549, 0.7830141941,
    0.7810857868, 0.7791518845, 0.7772125387, 0.7752678010, 0.7733177231, 0.7713623568,
    0.7694017539, 0.7674359664, 0.7654650462, 0.7634890455, 0.7615080165, 0.7595220115,
    0.7575310826, 0.7555352824, 0.7535346633, 0.7515292779, 0.7495191786, 0.7475044182,
    0.7454850495, 0.7434611251, 0.7414326979, 0.7393998208, 0.7373625467, 0.7353209286,
    0.7332750196, 0.7312248727, 0.7291705411, 0.7271120779, 0.7250495363, 0.7229829696,
    0.7209124311, 0.7188379741, 0.7167596519, 0.7146775179, 0.7125916255, 0.7105020282,
    0.7084087794, 0.7063119326, 0.7042115412, 0.7021076589, 0.7000003391, 0.6978896353,
    0.6957756012, 0.6936582904, 0.6915377562, 0.6894140525, 0.6872872327, 0.6851573504,
    0.6830244593, 0.6808886129, 0.6787498647, 0.6766082685, 0.6744638776, 0.6723167458,
    0.6701669264, 0.6680144732, 0.6658594395, 0.6637018789, 0.6615418449, 0.6593793908,
    0.6572145702, 0.6550474365, 0.6528780430, 0.6507064430, 0.6485326899, 0.6463568370,
    0.6441789376, 0.6419990447, 0.6398172117, 0.6376334915, 0.6354479374, 0.6332606024,
    0.6310715394, 0.6288808013, 0.6266884412, 0.6244945118, 0.6222990659, 0.6201021563,
    0.6179038355, 0.6157041563, 0.6135031712, 0.6113009327, 0.6090974931, 0.6068929048,
    0.6046872202, 0.6024804914, 0.6002727705, 0.5980641097, 0.5958545609, 0.5936441759,
    0.5914330068, 0.5892211051, 0.5870085225, 0.5847953107, 0.5825815210, 0.5803672050,
    0.5781524138, 0.5759371988, 0.5737216110, 0.5715057014, 0.5692895210, 0.5670731206,
    0.5648565508, 0.5626398624, 0.5604231058, 0.5582063315, 0.5559895897, 0.5537729305,
    0.5515564042, 0.5493400606, 0.5471239496, 0.5449081209, 0.5426926240, 0.5404775086,
    0.5382628239, 0.5360486193, 0.5338349437, 0.5316218462, 0.5294093757, 0.5271975808,
    0.5249865102, 0.5227762124, 0.5205667356, 0.5183581281, 0.5161504378, 0.5139437128,
    0.5117380008, 0.5095333493, 0.5073298060, 0.5051274181, 0.5029262328, 0.5007262972,
    0.4985276581, 0.4963303623, 0.4941344564, 0.4919399867, 0.4897469997, 0.4875555413,
    0.4853656576, 0.4831773943, 0.4809907970, 0.4788059113, 0.4766227825, 0.4744414556,
    0.4722619757, 0.4700843875, 0.4679087357, 0.4657350648, 0.4635634189, 0.4613938423,
    0.4592263789, 0.4570610723, 0.4548979663, 0.4527371042, 0.4505785292, 0.4484222843,
    0.4462684124, 0.4441169563, 0.4419679582, 0.4398214606, 0.4376775055, 0.4355361349,
    0.4333973905, 0.4312613138, 0.4291279461, 0.4269973287, 0.4248695023, 0.4227445079,
    0.4206223859, 0.4185031767, 0.4163869204, 0.4142736570, 0.4121634263, 0.4100562677,
    0.4079522207, 0.4058513243, 0.4037536175, 0.4016591391, 0.3995679274, 0.3974800209,
    0.3953954575, 0.3933142753, 0.3912365118, 0.3891622045, 0.3870913906, 0.3850241072,
    0.3829603910, 0.3809002787, 0.3788438066, 0.3767910109, 0.3747419274, 0.3726965919,
    0.3706550399, 0.3686173066, 0.3665834271, 0.3645534361, 0.3625273684, 0.3605052581,
    0.3584871395, 0.3564730465, 0.3544630127, 0.3524570715, 0.3504552563, 0.3484576000,
    0.3464641353, 0.3444748947, 0.3424899106, 0.3405092150, 0.3385328397, 0.3365608163,
    0.3345931762, 0.3326299504, 0.3306711698, 0.3287168651, 0.3267670666, 0.3248218046,
    0.3228811089, 0.3209450093, 0.3190135351, 0.3170867155, 0.3151645796, 0.3132471560,
    0.3113344731, 0.3094265593, 0.3075234425, 0.3056251504, 0.3037317105, 0.3018431501,
    0.2999594962, 0.2980807755, 0.2962070145, 0.2943382396, 0.2924744766, 0.2906157514,
    0.2887620895, 0.2869135162, 0.2850700564, 0.2832317351, 0.2813985765, 0.2795706052,
    0.2777478450, 0.2759303197, 0.2741180529, 0.2723110678, 0.2705093874, 0.2687130345,
    0.2669220317, 0.2651364012, 0.2633561649, 0.2615813447, 0.2598119620, 0.2580480381,
    0.2562895941, 0.2545366505, 0.2527892280, 0.2510473468, 0.2493110269, 0.2475802879,
    0.2458551494, 0.2441356306, 0.2424217505, 0.2407135277, 0.2390109808, 0.2373141279,
    0.2356229871, 0.2339375759, 0.2322579119, 0.2305840122, 0.2289158939, 0.2272535735,
    0.2255970674, 0.2239463920, 0.2223015631, 0.2206625963, 0.2190295071, 0.2174023107,
    0.2157810219, 0.2141656554, 0.2125562256, 0.2109527467, 0.2093552326, 0.2077636969,
    0.2061781529, 0.2045986139, 0.2030250928, 0.2014576021, 0.1998961542, 0.1983407614,
    0.1967914354, 0.1952481879, 0.1937110302, 0.1921799736, 0.1906550289, 0.1891362067,
    0.1876235174, 0.1861169711, 0.1846165778, 0.1831223470, 0.1816342882, 0.1801524104,
    0.1786767227, 0.1772072336, 0.1757439515, 0.1742868846, 0.1728360407, 0.1713914277,
    0.1699530528, 0.1685209233, 0.1670950460, 0.1656754278, 0.1642620749, 0.1628549937,
    0.1614541900, 0.1600596697, 0.1586714381, 0.1572895005, 0.1559138620, 0.1545445273,
    0.1531815008, 0.1518247869, 0.1504743897, 0.1491303129, 0.1477925601, 0.1464611347,
    0.1451360397, 0.1438172780, 0.1425048523, 0.1411987650, 0.1398990182, 0.1386056138,
    0.1373185536, 0.1360378391, 0.1347634714, 0.1334954516, 0.1322337806, 0.1309784588,
    0.1297294866, 0.1284868641, 0.1272505911, 0.1260206675, 0.1247970924, 0.1235798653,
    0.1223689851, 0.1211644505, 0.1199662600, 0.1187744121, 0.1175889049, 0.1164097361,
    0.1152369035, 0.1140704046, 0.1129102365, 0.1117563964, 0.1106088809, 0.1094676868,
    0.1083328104, 0.1072042478, 0.1060819951, 0.1049660480, 0.1038564020, 0.1027530525,
    0.1016559946, 0.1005652233, 0.0994807331, 0.0984025188, 0.0973305745, 0.0962648944,
    0.0952054724, 0.0941523022, 0.0931053773, 0.0920646911, 0.0910302365, 0.0900020067,
    0.0889799942, 0.0879641916, 0.0869545913, 0.0859511854, 0.0849539658, 0.0839629243,
    0.0829780524, 0.0819993417, 0.0810267831, 0.0800603679, 0.0791000867, 0.0781459303,
    0.0771978890, 0.0762559533, 0.0753201131, 0.0743903584, 0.0734666789, 0.0725490642,
    0.0716375037, 0.0707319866, 0.0698325019, 0.0689390384, 0.0680515850, 0.0671701301,
    0.0662946620, 0.0654251690, 0.0645616391, 0.0637040600, 0.0628524196, 0.0620067053,
    0.0611669045, 0.0603330043, 0.0595049919, 0.0586828541, 0.0578665776, 0.0570561490,
    0.0562515547, 0.0554527810, 0.0546598139, 0.0538726395, 0.0530912435, 0.0523156116,
    0.0515457292, 0.0507815818, 0.0500231545, 0.0492704324, 0.0485234005, 0.0477820435,
    0.0470463460, 0.0463162926, 0.0455918677, 0.0448730554, 0.0441598398, 0.0434522049,
    0.0427501346, 0.0420536125, 0.0413626221, 0.0406771469, 0.0399971703, 0.0393226753,
    0.0386536451, 0.0379900625, 0.0373319104, 0.0366791714, 0.0360318281, 0.0353898629,
    0.0347532582, 0.0341219961, 0.0334960589, 0.0328754283, 0.0322600863, 0.0316500147,
    0.0310451950, 0.0304456089, 0.0298512377, 0.0292620628, 0.0286780653, 0.0280992264,
    0.0275255270, 0.0269569482, 0.0263934706, 0.0258350750, 0.0252817420, 0.0247334522,
    0.0241901858, 0.0236519233, 0.0231186449, 0.0225903307, 0.0220669608, 0.0215485151,
    0.0210349735, 0.0205263158, 0.0200225217, 0.0195235708, 0.0190294427, 0.0185401168,
    0.0180555725, 0.0175757891, 0.0171007458, 0.0166304218, 0.0161647962, 0.0157038479,
    0.0152475559, 0.0147958991, 0.0143488562, 0.0139064059, 0.0134685270, 0.0130351980,
    0.0126063975, 0.0121821038, 0.0117622955, 0.0113469509, 0.0109360482, 0.0105295656,
    0.0101274815, 0.0097297738, 0.0093364207, 0.0089474001, 0.0085626901, 0.0081822685,
    0.0078061132, 0.0074342020, 0.0070665127, 0.0067030230, 0.0063437106, 0.0059885532,
    0.0056375283, 0.0052906135, 0.0049477864, 0.0046090244, 0.0042743049, 0.0039436054,
    0.0036169033, 0.0032941759, 0.0029754006, 0.0026605546, 0.0023496151, 0.0020425595,
    0.0017393650, 0.0014400086, 0.0011444676, 0.0008527192, 0.0005647404, 0.0002805083,
    0.0000000000,
];
